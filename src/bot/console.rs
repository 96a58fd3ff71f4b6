//! Line-oriented console transport: one inbound chat message per stdin
//! line, replies on stdout. Used by `rinterlog run` and by the
//! integration tests.

use crate::bot::router::Router;
use crate::bot::transport::Conversation;
use crate::errors::AppResult;
use std::io::{self, BufRead};

pub struct StdoutConversation;

impl Conversation for StdoutConversation {
    fn reply(&mut self, text: &str) {
        println!("{}", text);
    }
}

/// Dispatch stdin lines through the router until EOF.
pub fn listen(router: &Router) -> AppResult<()> {
    let stdin = io::stdin();
    let mut conv = StdoutConversation;

    for line in stdin.lock().lines() {
        let line = line?;
        router.handle_message(&line, &mut conv);
    }

    Ok(())
}
