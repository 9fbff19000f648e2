// SPDX-License-Identifier: Apache-2.0
//! Shared record types carried inside envelope payloads.
//!
//! Field names follow the engine's wire spelling (`userID`, `avatarURL`,
//! …), so every struct pins renames explicitly. All records tolerate
//! partially-populated payloads: missing fields fall back to their
//! declared defaults.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::codes::{
    AllowType, DeviceStatus, Gender, NetworkQuality, TakeSeatMode, UserRole,
};

fn default_true() -> bool {
    true
}

/// A user as seen by room-level rosters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiveUserInfo {
    /// Stable user id.
    #[serde(rename = "userID")]
    pub user_id: String,
    /// Display name.
    #[serde(rename = "userName")]
    pub user_name: String,
    /// Avatar image URL.
    #[serde(rename = "avatarURL")]
    pub avatar_url: String,
}

/// A user occupying (or invited to) a seat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeatUserInfo {
    /// Stable user id.
    #[serde(rename = "userID")]
    pub user_id: String,
    /// Display name.
    #[serde(rename = "userName")]
    pub user_name: String,
    /// Avatar image URL.
    #[serde(rename = "avatarURL")]
    pub avatar_url: String,
    /// Room role of the user, when known.
    pub role: Option<UserRole>,
    /// Room the seat belongs to.
    #[serde(rename = "liveID")]
    pub live_id: String,
    /// Microphone state on the seat.
    #[serde(rename = "microphoneStatus")]
    pub microphone_status: Option<DeviceStatus>,
    /// Whether the user may open their microphone.
    #[serde(rename = "allowOpenMicrophone", default = "default_true")]
    pub allow_open_microphone: bool,
    /// Camera state on the seat.
    #[serde(rename = "cameraStatus")]
    pub camera_status: Option<DeviceStatus>,
    /// Whether the user may open their camera.
    #[serde(rename = "allowOpenCamera", default = "default_true")]
    pub allow_open_camera: bool,
}

impl Default for SeatUserInfo {
    fn default() -> Self {
        Self {
            user_id: String::new(),
            user_name: String::new(),
            avatar_url: String::new(),
            role: None,
            live_id: String::new(),
            microphone_status: None,
            allow_open_microphone: true,
            camera_status: None,
            allow_open_camera: true,
        }
    }
}

/// The logged-in account's own profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    /// Stable user id.
    #[serde(rename = "userID")]
    pub user_id: String,
    /// Display name.
    pub nickname: String,
    /// Avatar image URL.
    #[serde(rename = "avatarURL")]
    pub avatar_url: String,
    /// Free-form signature line.
    #[serde(rename = "selfSignature")]
    pub self_signature: String,
    /// Profile gender, when set.
    pub gender: Option<Gender>,
    /// Account-level role value from the profile service.
    pub role: u32,
    /// Account level.
    pub level: u32,
    /// Friend-request acceptance policy.
    #[serde(rename = "allowType")]
    pub allow_type: Option<AllowType>,
    /// Opaque custom profile entries.
    #[serde(rename = "customInfo")]
    pub custom_info: BTreeMap<String, String>,
}

/// One room in the live directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiveInfo {
    /// Stable room id.
    #[serde(rename = "liveID")]
    pub live_id: String,
    /// Room title.
    #[serde(rename = "liveName")]
    pub live_name: String,
    /// Pinned room notice text.
    pub notice: String,
    /// Whether chat is disabled room-wide.
    #[serde(rename = "isMessageDisable")]
    pub is_message_disable: bool,
    /// Whether the room is listed publicly.
    #[serde(rename = "isPublicVisible")]
    pub is_public_visible: bool,
    /// Whether the seat grid is enabled.
    #[serde(rename = "isSeatEnabled")]
    pub is_seat_enabled: bool,
    /// Whether the owner keeps a seat while streaming.
    #[serde(rename = "keepOwnerOnSeat")]
    pub keep_owner_on_seat: bool,
    /// Seat grid capacity.
    #[serde(rename = "maxSeatCount")]
    pub max_seat_count: u32,
    /// How seats are taken.
    #[serde(rename = "seatMode")]
    pub seat_mode: Option<TakeSeatMode>,
    /// Layout template applied to the seat grid.
    #[serde(rename = "seatLayoutTemplateID")]
    pub seat_layout_template_id: u64,
    /// Cover image URL.
    #[serde(rename = "coverURL")]
    pub cover_url: String,
    /// Background image URL.
    #[serde(rename = "backgroundURL")]
    pub background_url: String,
    /// Engine-defined activity status value.
    #[serde(rename = "activityStatus")]
    pub activity_status: u32,
    /// Owner of the room.
    #[serde(rename = "liveOwner")]
    pub live_owner: LiveUserInfo,
    /// Creation time (epoch milliseconds).
    #[serde(rename = "createTime")]
    pub create_time: u64,
    /// Directory category ids.
    #[serde(rename = "categoryList")]
    pub category_list: Vec<u32>,
    /// Total viewers across the stream's lifetime.
    #[serde(rename = "totalViewerCount")]
    pub total_viewer_count: u64,
    /// Whether gifting is enabled.
    #[serde(rename = "isGiftEnabled")]
    pub is_gift_enabled: bool,
    /// Opaque room metadata entries.
    #[serde(rename = "metaData")]
    pub meta_data: BTreeMap<String, String>,
}

/// One gift in the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Gift {
    /// Stable gift id.
    #[serde(rename = "giftID")]
    pub gift_id: String,
    /// Display name.
    pub name: String,
    /// Short description.
    pub desc: String,
    /// Icon image URL.
    #[serde(rename = "iconURL")]
    pub icon_url: String,
    /// Animation resource URL.
    #[serde(rename = "resourceURL")]
    pub resource_url: String,
    /// Gift tier.
    pub level: u32,
    /// Price in coins.
    pub coins: u64,
    /// Opaque extension entries.
    #[serde(rename = "extensionInfo")]
    pub extension_info: BTreeMap<String, String>,
}

/// A named group of gifts in the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GiftCategory {
    /// Stable category id.
    #[serde(rename = "categoryID")]
    pub category_id: String,
    /// Display name.
    pub name: String,
    /// Short description.
    pub desc: String,
    /// Opaque extension entries.
    #[serde(rename = "extensionInfo")]
    pub extension_info: BTreeMap<String, String>,
    /// Gifts in this category.
    #[serde(rename = "giftList")]
    pub gift_list: Vec<Gift>,
}

/// One chat message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarrageMessage {
    /// Room the message was sent in.
    #[serde(rename = "liveID")]
    pub live_id: String,
    /// Text body for plain messages.
    #[serde(rename = "textContent")]
    pub text_content: String,
    /// Business tag for custom messages.
    #[serde(rename = "businessID")]
    pub business_id: Option<String>,
    /// Opaque data for custom messages.
    pub data: Option<String>,
    /// Message author.
    pub sender: LiveUserInfo,
}

/// Placement of a seat on the layout canvas.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeatRegion {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub w: f64,
    /// Height.
    pub h: f64,
    /// Stacking order.
    pub zorder: u32,
}

/// One slot in the seat grid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeatInfo {
    /// Seat index within the grid.
    pub index: u32,
    /// Whether the seat is locked against taking.
    #[serde(rename = "isLocked")]
    pub is_locked: bool,
    /// Occupant, empty-id when vacant.
    #[serde(rename = "userInfo")]
    pub user_info: SeatUserInfo,
    /// Canvas placement.
    pub region: SeatRegion,
}

/// The seat layout canvas.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiveCanvas {
    /// Layout template id.
    #[serde(rename = "templateID")]
    pub template_id: u64,
    /// Canvas width.
    pub w: f64,
    /// Canvas height.
    pub h: f64,
    /// Background color or image reference.
    pub background: Option<String>,
}

/// Network measurement for one user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkInfo {
    /// User the measurement applies to.
    #[serde(rename = "userID")]
    pub user_id: String,
    /// Quality bucket.
    pub quality: Option<NetworkQuality>,
    /// Upstream packet loss percentage.
    #[serde(rename = "upLoss")]
    pub up_loss: u32,
    /// Downstream packet loss percentage.
    #[serde(rename = "downLoss")]
    pub down_loss: u32,
    /// Round-trip delay in milliseconds.
    pub delay: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_seat_user_decodes_with_defaults() {
        let user: SeatUserInfo =
            serde_json::from_str(r#"{"userID":"u1","microphoneStatus":"ON"}"#).unwrap();
        assert_eq!(user.user_id, "u1");
        assert_eq!(user.microphone_status, Some(DeviceStatus::On));
        assert!(user.allow_open_microphone);
        assert!(user.allow_open_camera);
        assert_eq!(user.camera_status, None);
    }

    #[test]
    fn live_info_round_trips() {
        let info = LiveInfo {
            live_id: "live_1".into(),
            live_name: "morning show".into(),
            max_seat_count: 9,
            seat_mode: Some(TakeSeatMode::Apply),
            live_owner: LiveUserInfo {
                user_id: "owner".into(),
                user_name: "Owner".into(),
                avatar_url: String::new(),
            },
            ..LiveInfo::default()
        };
        let json = serde_json::to_string(&info).unwrap();
        let back: LiveInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, info);
        assert!(json.contains("\"liveID\""));
        assert!(json.contains("\"seatMode\":\"APPLY\""));
    }

    #[test]
    fn network_info_accepts_quality_code() {
        let info: NetworkInfo =
            serde_json::from_str(r#"{"userID":"u1","quality":2,"delay":40}"#).unwrap();
        assert_eq!(info.quality, Some(NetworkQuality::Good));
        assert_eq!(info.delay, 40);
        assert_eq!(info.up_loss, 0);
    }
}
