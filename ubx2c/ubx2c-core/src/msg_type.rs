use std::fmt;

/// Message variant types used in the `Type` column of the u-blox ICD.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MsgType {
    /// Broadcast / answer-to-poll message (device to host)
    Output,
    /// Host-to-device payload
    Input,
    /// Request asking the device to send a message
    PollRequest,
    Poll,
    Polled,
    Periodic,
    PeriodicPolled,
    Command,
    Set,
    Get,
    GetSet,
    /// Unrecognized type string, kept verbatim
    Unknown(String),
}

impl MsgType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Output => "Output",
            Self::Input => "Input",
            Self::PollRequest => "PollRequest",
            Self::Poll => "Poll",
            Self::Polled => "Polled",
            Self::Periodic => "Periodic",
            Self::PeriodicPolled => "PeriodicPolled",
            Self::Command => "Command",
            Self::Set => "Set",
            Self::Get => "Get",
            Self::GetSet => "GetSet",
            Self::Unknown(s) => s,
        }
    }

    /// Whether messages of this type carry a device-to-host payload body.
    ///
    /// Request-style variants (`PollRequest`, `Input`, `Command`, `Set`) have
    /// nothing for the host to deserialize, so no parse functions are
    /// generated for them.
    pub fn has_payload_body(&self) -> bool {
        !matches!(
            self,
            Self::PollRequest | Self::Input | Self::Command | Self::Set
        )
    }
}

impl From<&str> for MsgType {
    fn from(s: &str) -> Self {
        match s {
            "Output" => Self::Output,
            "Input" => Self::Input,
            "PollRequest" => Self::PollRequest,
            "Poll" => Self::Poll,
            "Polled" => Self::Polled,
            "Periodic" => Self::Periodic,
            "PeriodicPolled" => Self::PeriodicPolled,
            "Command" => Self::Command,
            "Set" => Self::Set,
            "Get" => Self::Get,
            "GetSet" => Self::GetSet,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for MsgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
