/// Reply channel back to the chat platform.
///
/// This is the seam between the bot logic and whatever framework delivers
/// the conversation: the router only ever talks back through this trait.
pub trait Conversation {
    fn reply(&mut self, text: &str);
}
