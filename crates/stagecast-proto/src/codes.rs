// SPDX-License-Identifier: Apache-2.0
//! Closed integer→symbol code tables shared with the native engine.
//!
//! Enum-coded values cross the wire as raw integers; the bridge maps them
//! through these tables before they reach a cache. The tables are closed
//! and fixed: an unmapped integer is a protocol violation to be logged by
//! the caller, never guessed at. Symbols follow the engine's
//! SCREAMING_SNAKE wire names, which is also how each type serializes.
//! Deserialization accepts either the raw code or the symbol, since
//! nested records carry symbols while top-level fields carry codes.

/// Common surface of every code-table enum.
pub trait CodeEnum: Copy + std::fmt::Debug + 'static {
    /// Map a raw wire code into the table, `None` when unmapped.
    fn from_code(code: i64) -> Option<Self>
    where
        Self: Sized;
    /// The raw wire code for this symbol.
    fn code(self) -> i64;
    /// The wire symbol name.
    fn as_str(self) -> &'static str;
}

macro_rules! code_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($code:literal => $variant:ident = $symbol:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                #[doc = concat!("Wire code `", stringify!($code), "`, symbol `", $symbol, "`.")]
                $variant,
            )+
        }

        impl $name {
            /// Map a raw wire code into the table, `None` when unmapped.
            pub fn from_code(code: i64) -> Option<Self> {
                match code {
                    $($code => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// The raw wire code for this symbol.
            pub fn code(self) -> i64 {
                match self {
                    $(Self::$variant => $code,)+
                }
            }

            /// The wire symbol name.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $symbol,)+
                }
            }

            fn from_symbol(symbol: &str) -> Option<Self> {
                match symbol {
                    $($symbol => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl CodeEnum for $name {
            fn from_code(code: i64) -> Option<Self> {
                Self::from_code(code)
            }
            fn code(self) -> i64 {
                Self::code(self)
            }
            fn as_str(self) -> &'static str {
                Self::as_str(self)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct TableVisitor;

                impl<'de> serde::de::Visitor<'de> for TableVisitor {
                    type Value = $name;

                    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(f, concat!("a ", stringify!($name), " code or symbol"))
                    }

                    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        $name::from_code(v).ok_or_else(|| {
                            E::custom(format!(
                                concat!("unknown ", stringify!($name), " code {}"),
                                v
                            ))
                        })
                    }

                    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        i64::try_from(v)
                            .ok()
                            .and_then($name::from_code)
                            .ok_or_else(|| {
                                E::custom(format!(
                                    concat!("unknown ", stringify!($name), " code {}"),
                                    v
                                ))
                            })
                    }

                    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        $name::from_symbol(v).ok_or_else(|| {
                            E::custom(format!(
                                concat!("unknown ", stringify!($name), " symbol `{}`"),
                                v
                            ))
                        })
                    }
                }

                deserializer.deserialize_any(TableVisitor)
            }
        }
    };
}

code_enum! {
    /// Whether a capture device is currently open.
    DeviceStatus {
        0 => Off = "OFF",
        1 => On = "ON",
    }
}

code_enum! {
    /// Last error reported for a capture device.
    DeviceError {
        0 => NoError = "NO_ERROR",
        1 => NoDeviceDetected = "NO_DEVICE_DETECTED",
        2 => NoSystemPermission = "NO_SYSTEM_PERMISSION",
        3 => NotSupportCapture = "NOT_SUPPORT_CAPTURE",
        4 => Occupied = "OCCUPIED_ERROR",
        5 => Unknown = "UNKNOWN_ERROR",
    }
}

code_enum! {
    /// Audio output route.
    AudioRoute {
        0 => Speakerphone = "SPEAKERPHONE",
        1 => Earpiece = "EARPIECE",
    }
}

code_enum! {
    /// Voice changer preset.
    AudioChangerType {
        0 => None = "NONE",
        1 => Child = "CHILD",
        2 => LittleGirl = "LITTLE_GIRL",
        3 => Man = "MAN",
        4 => HeavyMetal = "HEAVY_METAL",
        5 => Cold = "COLD",
        6 => Foreigner = "FOREIGNER",
        7 => TrappedBeast = "TRAPPED_BEAST",
        8 => Fatso = "FATSO",
        9 => StrongCurrent = "STRONG_CURRENT",
        10 => HeavyMachinery = "HEAVY_MACHINERY",
        11 => Ethereal = "ETHEREAL",
    }
}

code_enum! {
    /// Reverb preset.
    AudioReverbType {
        0 => None = "NONE",
        1 => Ktv = "KTV",
        2 => SmallRoom = "SMALL_ROOM",
        3 => Auditorium = "AUDITORIUM",
        4 => Deep = "DEEP",
        5 => Loud = "LOUD",
        6 => Metallic = "METALLIC",
        7 => Magnetic = "MAGNETIC",
    }
}

code_enum! {
    /// Measured network quality bucket.
    NetworkQuality {
        0 => Unknown = "UNKNOWN",
        1 => Excellent = "EXCELLENT",
        2 => Good = "GOOD",
        3 => Poor = "POOR",
        4 => Bad = "BAD",
        5 => VeryBad = "VERY_BAD",
        6 => Down = "DOWN",
    }
}

code_enum! {
    /// Local preview mirroring mode.
    MirrorType {
        0 => Auto = "AUTO",
        1 => Enable = "ENABLE",
        2 => Disable = "DISABLE",
    }
}

code_enum! {
    /// Published video resolution tier.
    VideoQuality {
        1 => Q360p = "360P",
        2 => Q540p = "540P",
        3 => Q720p = "720P",
        4 => Q1080p = "1080P",
    }
}

code_enum! {
    /// Why a live stream ended.
    LiveEndedReason {
        0 => EndedByOwner = "ENDED_BY_OWNER",
        1 => EndedByServer = "ENDED_BY_SERVER",
    }
}

code_enum! {
    /// Why the local user was removed from a live stream.
    KickedOutReason {
        0 => ByOwner = "BY_OWNER",
        1 => ByLoggedOnOtherDevice = "BY_LOGGED_ON_OTHER_DEVICE",
        2 => ByServer = "BY_SERVER",
        3 => ForNetworkDisconnected = "FOR_NETWORK_DISCONNECTED",
        4 => ForJoinStatusInvalidDuringOffline = "FOR_JOIN_STATUS_INVALID_DURING_OFFLINE",
        5 => ForJoinedRoomLimitExceeded = "FOR_JOINED_ROOM_LIMIT_EXCEEDED",
    }
}

code_enum! {
    /// Why a seat invitation or application got no response.
    NoResponseReason {
        0 => Timeout = "TIMEOUT",
        1 => AlreadySeated = "ALREADY_SEATED",
    }
}

code_enum! {
    /// How an admin-initiated device open is applied locally.
    DeviceControlPolicy {
        0 => ForceOpen = "FORCE_OPEN",
        1 => UnlockOnly = "UNLOCK_ONLY",
    }
}

code_enum! {
    /// Host↔host connection state.
    CoHostStatus {
        0 => Disconnected = "DISCONNECTED",
        1 => Connected = "CONNECTED",
    }
}

code_enum! {
    /// Account session state.
    LoginStatus {
        0 => Unlogin = "UNLOGIN",
        1 => Logined = "LOGINED",
    }
}

code_enum! {
    /// Friend-request acceptance policy on a profile.
    AllowType {
        0 => AllowAny = "ALLOW_ANY",
        1 => NeedConfirm = "NEED_CONFIRM",
        2 => DenyAny = "DENY_ANY",
    }
}

code_enum! {
    /// Profile gender.
    Gender {
        0 => Unknown = "UNKNOWN",
        1 => Male = "MALE",
        2 => Female = "FEMALE",
    }
}

code_enum! {
    /// Role of a user within a room.
    UserRole {
        0 => Owner = "OWNER",
        1 => Admin = "ADMIN",
        2 => GeneralUser = "GENERAL_USER",
    }
}

code_enum! {
    /// How seats are taken in a room.
    TakeSeatMode {
        0 => Free = "FREE",
        1 => Apply = "APPLY",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_round_trip<E: CodeEnum + PartialEq>(all: &[E]) {
        for &entry in all {
            assert_eq!(E::from_code(entry.code()), Some(entry));
        }
    }

    #[test]
    fn tables_round_trip_codes() {
        assert_round_trip(&[DeviceStatus::Off, DeviceStatus::On]);
        assert_round_trip(&[
            DeviceError::NoError,
            DeviceError::NoDeviceDetected,
            DeviceError::NoSystemPermission,
            DeviceError::NotSupportCapture,
            DeviceError::Occupied,
            DeviceError::Unknown,
        ]);
        assert_round_trip(&[AudioRoute::Speakerphone, AudioRoute::Earpiece]);
        assert_round_trip(&[
            NetworkQuality::Unknown,
            NetworkQuality::Excellent,
            NetworkQuality::Good,
            NetworkQuality::Poor,
            NetworkQuality::Bad,
            NetworkQuality::VeryBad,
            NetworkQuality::Down,
        ]);
        assert_round_trip(&[
            VideoQuality::Q360p,
            VideoQuality::Q540p,
            VideoQuality::Q720p,
            VideoQuality::Q1080p,
        ]);
        assert_round_trip(&[UserRole::Owner, UserRole::Admin, UserRole::GeneralUser]);
    }

    #[test]
    fn unmapped_codes_stay_outside_the_table() {
        assert_eq!(DeviceStatus::from_code(2), None);
        assert_eq!(DeviceStatus::from_code(-1), None);
        assert_eq!(AudioChangerType::from_code(12), None);
        assert_eq!(AudioReverbType::from_code(8), None);
        assert_eq!(VideoQuality::from_code(0), None);
        assert_eq!(LoginStatus::from_code(7), None);
    }

    #[test]
    fn symbols_serialize_as_wire_names() {
        let json = serde_json::to_string(&DeviceStatus::On).unwrap();
        assert_eq!(json, "\"ON\"");
        let json = serde_json::to_string(&NoResponseReason::AlreadySeated).unwrap();
        assert_eq!(json, "\"ALREADY_SEATED\"");
    }

    #[test]
    fn deserialize_accepts_code_or_symbol() {
        let from_code: UserRole = serde_json::from_str("1").unwrap();
        assert_eq!(from_code, UserRole::Admin);
        let from_symbol: UserRole = serde_json::from_str("\"ADMIN\"").unwrap();
        assert_eq!(from_symbol, UserRole::Admin);
        assert!(serde_json::from_str::<UserRole>("9").is_err());
        assert!(serde_json::from_str::<UserRole>("\"NOBODY\"").is_err());
    }

    #[test]
    fn video_quality_symbols_match_tiers() {
        assert_eq!(VideoQuality::Q1080p.as_str(), "1080P");
        assert_eq!(VideoQuality::from_code(2), Some(VideoQuality::Q540p));
    }
}
