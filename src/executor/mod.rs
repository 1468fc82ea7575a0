//! Command executor
//! Applies completed productions to the text buffer

use crate::buffer::TextBuffer;
use crate::command::Command;

/// Execute a command on the text buffer.
///
/// Returns the word removed by `dw`/`cw`. Mode changes are handled by the dispatcher.
pub fn execute_command(cmd: Command, buf: &mut TextBuffer) -> Option<String> {
    match cmd {
        Command::Move { motion, count } => {
            buf.move_cursor(motion, count);
            None
        }
        Command::JumpTop => {
            buf.jump_top();
            None
        }
        Command::JumpBottom => {
            buf.jump_bottom();
            None
        }
        Command::DeleteWord => Some(buf.delete_word_at_cursor()),
        Command::ChangeWord => Some(buf.change_word_at_cursor()),
        Command::EnterInsertMode | Command::ExitInsertMode => None,
    }
}
