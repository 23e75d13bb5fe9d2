//! Numeric reply codes sent by the server.
//!
//! Only the numerics the relay actually emits are listed.

#![allow(non_camel_case_types)]

use std::fmt;

/// Server numeric reply code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum Response {
    /// 001 - Welcome to the network
    RPL_WELCOME = 1,
    /// 002 - Your host is running version
    RPL_YOURHOST = 2,
    /// 003 - Server creation date
    RPL_CREATED = 3,
    /// 004 - Server info (name, version, user modes, channel modes)
    RPL_MYINFO = 4,
    /// 315 - End of WHO list
    RPL_ENDOFWHO = 315,
    /// 352 - WHO reply
    RPL_WHOREPLY = 352,
    /// 353 - NAMES reply
    RPL_NAMREPLY = 353,
    /// 366 - End of NAMES list
    RPL_ENDOFNAMES = 366,
    /// 422 - MOTD file is missing
    ERR_NOMOTD = 422,
    /// 433 - Nickname is already in use
    ERR_NICKNAMEINUSE = 433,
}

impl Response {
    /// Returns the numeric code as u16.
    #[inline]
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Creates a Response from a numeric code.
    pub fn from_code(code: u16) -> Option<Response> {
        Some(match code {
            1 => Response::RPL_WELCOME,
            2 => Response::RPL_YOURHOST,
            3 => Response::RPL_CREATED,
            4 => Response::RPL_MYINFO,
            315 => Response::RPL_ENDOFWHO,
            352 => Response::RPL_WHOREPLY,
            353 => Response::RPL_NAMREPLY,
            366 => Response::RPL_ENDOFNAMES,
            422 => Response::ERR_NOMOTD,
            433 => Response::ERR_NICKNAMEINUSE,
            _ => return None,
        })
    }

    /// Check if this is an error response (4xx, 5xx).
    #[inline]
    pub fn is_error(&self) -> bool {
        (400..600).contains(&self.code())
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_is_zero_padded() {
        assert_eq!(Response::RPL_WELCOME.to_string(), "001");
        assert_eq!(Response::RPL_NAMREPLY.to_string(), "353");
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Response::from_code(433), Some(Response::ERR_NICKNAMEINUSE));
        assert_eq!(Response::from_code(999), None);
        assert!(Response::ERR_NOMOTD.is_error());
        assert!(!Response::RPL_ENDOFWHO.is_error());
    }
}
