// src/controllers/osc.rs
// OSC Controller
//
// Lets a show controller switch the clock's flair or debug overlay remotely.

use log::warn;
use nannou_osc as osc;

use crate::errors::ClockError;
use crate::views::FlairMode;

#[derive(Debug, Clone, PartialEq)]
pub enum OscCommand {
    SetFlair(FlairMode),
    SetDebug(bool),
    ToggleDebug,
}

pub struct OscController {
    command_queue: Vec<OscCommand>,
    receiver: osc::Receiver,
}

impl OscController {
    pub fn new(port: u16) -> Result<Self, ClockError> {
        let receiver = osc::receiver(port).map_err(|e| ClockError::OscBind {
            port,
            reason: e.to_string(),
        })?;

        Ok(Self {
            command_queue: Vec::new(),
            receiver,
        })
    }

    pub fn process_messages(&mut self) {
        for (packet, _addr) in self.receiver.try_iter() {
            for message in packet.into_msgs() {
                match parse_message(&message.addr, &message.args) {
                    Some(command) => self.command_queue.push(command),
                    None => warn!("Unknown OSC message: {} {:?}", message.addr, message.args),
                }
            }
        }
    }

    pub fn take_commands(&mut self) -> Vec<OscCommand> {
        std::mem::take(&mut self.command_queue)
    }
}

pub fn parse_message(addr: &str, args: &[osc::Type]) -> Option<OscCommand> {
    match addr {
        "/clock/flair" => {
            if let [osc::Type::String(name)] = args {
                Some(OscCommand::SetFlair(FlairMode::from_name(name)))
            } else {
                None
            }
        }
        "/clock/debug" => match args {
            [] => Some(OscCommand::ToggleDebug),
            [osc::Type::Int(setting)] => Some(OscCommand::SetDebug(*setting != 0)),
            [osc::Type::Bool(setting)] => Some(OscCommand::SetDebug(*setting)),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flair() {
        let args = vec![osc::Type::String("neon".to_string())];
        assert_eq!(
            parse_message("/clock/flair", &args),
            Some(OscCommand::SetFlair(FlairMode::Neon))
        );

        let args = vec![osc::Type::String("cinematic".to_string())];
        assert_eq!(
            parse_message("/clock/flair", &args),
            Some(OscCommand::SetFlair(FlairMode::Cinematic))
        );
    }

    #[test]
    fn test_parse_debug() {
        assert_eq!(
            parse_message("/clock/debug", &[]),
            Some(OscCommand::ToggleDebug)
        );
        assert_eq!(
            parse_message("/clock/debug", &[osc::Type::Int(1)]),
            Some(OscCommand::SetDebug(true))
        );
        assert_eq!(
            parse_message("/clock/debug", &[osc::Type::Int(0)]),
            Some(OscCommand::SetDebug(false))
        );
    }

    #[test]
    fn test_rejects_unknown_messages() {
        assert_eq!(parse_message("/grid/create", &[]), None);
        assert_eq!(parse_message("/clock/flair", &[osc::Type::Int(3)]), None);
        assert_eq!(
            parse_message("/clock/debug", &[osc::Type::Float(1.0)]),
            None
        );
    }
}
