use serenity::model::channel::Reaction;

/// Builds gateway `Reaction` values through JSON, since the type is non-exhaustive
pub struct MockReactionBuilder {
    message_id: u64,
    channel_id: u64,
    emoji: String,
    guild_id: Option<u64>,
    user_id: Option<u64>,
    member_user_id: Option<u64>,
}

#[allow(dead_code)]
impl MockReactionBuilder {
    pub fn new(message_id: u64, channel_id: u64) -> Self {
        Self {
            message_id,
            channel_id,
            emoji: "👍".to_string(),
            guild_id: None,
            user_id: None,
            member_user_id: None,
        }
    }

    pub fn emoji(mut self, emoji: &str) -> Self {
        self.emoji = emoji.to_string();
        self
    }

    /// Reactor reported as a bare user id
    pub fn user_id(mut self, user_id: u64) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Reactor reported only through the guild member object
    pub fn member(mut self, guild_id: u64, user_id: u64) -> Self {
        self.guild_id = Some(guild_id);
        self.member_user_id = Some(user_id);
        self
    }

    pub fn build(self) -> Reaction {
        let json = serde_json::json!({
            "type": 0, // Normal reaction
            "channel_id": self.channel_id.to_string(),
            "emoji": { "name": self.emoji, "id": null },
            "guild_id": self.guild_id.map(|id| id.to_string()),
            "member": self.member_user_id.map(|id| {
                serde_json::json!({
                    "user": {
                        "id": id.to_string(),
                        "username": "test_user",
                        "discriminator": "0",
                        "global_name": null,
                        "avatar": null,
                        "bot": false,
                        "public_flags": 0,
                        "flags": 0
                    },
                    "nick": null,
                    "avatar": null,
                    "roles": [],
                    "joined_at": "2024-01-01T00:00:00.000000+00:00",
                    "deaf": false,
                    "mute": false,
                    "flags": 0
                })
            }),
            "message_id": self.message_id.to_string(),
            "user_id": self.user_id.map(|id| id.to_string()),
            "count_details": {
                "burst": 0,
                "normal": 1
            },
            "burst_colours": [],
            "me_burst": false,
            "me": false,
            "burst": false
        });

        serde_json::from_value(json).expect("Failed to deserialize mock Reaction")
    }
}
