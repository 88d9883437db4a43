//! Single-character wire codes exposed as closed enums.
//!
//! TextMagic transmits several resource fields as one ASCII character inside
//! a JSON string (for example account `status`: `"A"`). Each field has its
//! own closed mapping table; decoding a character outside the table is a
//! [`DecodeError`], never a silent default.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("unrecognized {field} code {code:?}")]
/// A wire character that is not part of the field's mapping table.
pub struct DecodeError {
    /// JSON field the code was read from.
    pub field: &'static str,
    /// The offending character.
    pub code: char,
}

macro_rules! char_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($field:literal) {
            $($variant:ident = $code:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            /// JSON field this code is read from.
            pub const FIELD: &'static str = $field;

            /// The wire character for this variant.
            pub fn code(self) -> char {
                match self {
                    $(Self::$variant => $code,)+
                }
            }

            /// Map a wire character back to a variant.
            pub fn from_code(code: char) -> Result<Self, DecodeError> {
                match code {
                    $($code => Ok(Self::$variant),)+
                    _ => Err(DecodeError {
                        field: $field,
                        code,
                    }),
                }
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                let mut chars = raw.chars();
                match (chars.next(), chars.next()) {
                    (Some(code), None) => Self::from_code(code).map_err(serde::de::Error::custom),
                    _ => Err(serde::de::Error::custom(format!(
                        "expected single-character {} code, got {raw:?}",
                        $field
                    ))),
                }
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_char(self.code())
            }
        }
    };
}

char_enum! {
    /// Account status (`status` on the user resource).
    AccountStatus("status") {
        Active = 'A',
        Trial = 'T',
    }
}

char_enum! {
    /// Account type (`subaccountType` on the user resource).
    SubaccountType("subaccountType") {
        Parent = 'P',
        Administrator = 'A',
        Regular = 'U',
    }
}

char_enum! {
    /// Sender ID approval status (`status` on the senderids resource).
    SenderIdStatus("status") {
        Active = 'A',
        Pending = 'P',
        Rejected = 'R',
    }
}

char_enum! {
    /// Dedicated number status (`status` on the numbers resource).
    NumberStatus("status") {
        Active = 'A',
        Unused = 'U',
    }
}

char_enum! {
    /// Bulk sending session status (`status` on the bulks resource).
    BulkSessionStatus("status") {
        NotStarted = 'n',
        InProgress = 'w',
        Completed = 'c',
        Failed = 'f',
    }
}

char_enum! {
    /// Chat message direction (`direction` on the chats resource).
    MessageDirection("direction") {
        Outgoing = 'o',
        Incoming = 'i',
    }
}

char_enum! {
    /// Message delivery status (`status` on the messages resource).
    DeliveryStatus("status") {
        Queued = 'q',
        Scheduled = 's',
        Enroute = 'e',
        Acked = 'a',
        Delivered = 'd',
        Buffered = 'b',
        Failed = 'f',
        Rejected = 'j',
        Unknown = 'u',
    }
}

char_enum! {
    /// Session sending source (`source` on the sessions resource).
    SendingSource("source") {
        Api = 'A',
        WebApp = 'O',
        Tmm = 'T',
        EmailToSms = 'E',
        DistributionList = 'X',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_status_round_trips_through_codes() {
        assert_eq!(AccountStatus::from_code('A').unwrap(), AccountStatus::Active);
        assert_eq!(AccountStatus::from_code('T').unwrap(), AccountStatus::Trial);
        assert_eq!(AccountStatus::Active.code(), 'A');
    }

    #[test]
    fn unmapped_code_is_a_decode_error() {
        let err = AccountStatus::from_code('Z').unwrap_err();
        assert_eq!(
            err,
            DecodeError {
                field: "status",
                code: 'Z',
            }
        );
        assert_eq!(err.to_string(), "unrecognized status code 'Z'");
    }

    #[test]
    fn deserializes_from_single_character_json_string() {
        let status: AccountStatus = serde_json::from_str("\"T\"").unwrap();
        assert_eq!(status, AccountStatus::Trial);

        let direction: MessageDirection = serde_json::from_str("\"i\"").unwrap();
        assert_eq!(direction, MessageDirection::Incoming);
    }

    #[test]
    fn rejects_unmapped_and_multi_character_strings() {
        assert!(serde_json::from_str::<AccountStatus>("\"Z\"").is_err());
        assert!(serde_json::from_str::<AccountStatus>("\"AT\"").is_err());
        assert!(serde_json::from_str::<AccountStatus>("\"\"").is_err());
    }

    #[test]
    fn serializes_back_to_the_wire_character() {
        assert_eq!(
            serde_json::to_string(&SubaccountType::Regular).unwrap(),
            "\"U\""
        );
        assert_eq!(
            serde_json::to_string(&DeliveryStatus::Delivered).unwrap(),
            "\"d\""
        );
    }

    #[test]
    fn every_table_is_closed() {
        assert!(SenderIdStatus::from_code('X').is_err());
        assert!(NumberStatus::from_code('P').is_err());
        assert!(BulkSessionStatus::from_code('x').is_err());
        assert!(MessageDirection::from_code('b').is_err());
        assert!(DeliveryStatus::from_code('z').is_err());
        assert!(SendingSource::from_code('q').is_err());
    }
}
