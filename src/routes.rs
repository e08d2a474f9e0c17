//! Route Table
//!
//! Paths of the three views and the gate decision for gated routes.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";
pub const FUNCTION_PREFIX: &str = "/function/";

// Characters that cannot appear raw inside one path segment
const SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Detail page link for a catalog id
pub fn function_path(id: &str) -> String {
    format!("{}{}", FUNCTION_PREFIX, utf8_percent_encode(id, SEGMENT_ENCODE_SET))
}

/// What the guard does for a gated route
#[derive(Debug, Clone, PartialEq)]
pub enum Access {
    Render,
    Redirect(&'static str),
}

/// Binary gate on the session flag alone. The path never matters: the
/// guard only wraps gated routes, and the router decides which those are.
pub fn gate(logged_in: bool) -> Access {
    if logged_in {
        Access::Render
    } else {
        Access::Redirect(LOGIN_PATH)
    }
}
