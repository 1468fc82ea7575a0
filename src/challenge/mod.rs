//! Built-in challenge curriculum

/// A single tutorial unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Challenge {
    /// What the learner is asked to do
    pub prompt: &'static str,
    /// The command string that solves it, compared against the typed token
    pub solution: &'static str,
    pub hint: &'static str,
    /// Buffer contents the challenge starts from
    pub text: &'static str,
}

/// The default curriculum, in teaching order
pub const CHALLENGES: &[Challenge] = &[
    Challenge {
        prompt: "Move to the end of the line",
        solution: "$",
        hint: "Use '$' to move to the end of the line.",
        text: "This is a sample line of text.\nMove the cursor to the end of this line.",
    },
    Challenge {
        prompt: "Move to the beginning of the file",
        solution: "gg",
        hint: "Use 'gg' to move to the first line of the file.",
        text: "This is the first line.\nThis is the second line.\nThis is the third line.",
    },
    Challenge {
        prompt: "Delete a word",
        solution: "dw",
        hint: "Use 'dw' to delete from the cursor to the end of the word.",
        text: "Delete this word.\nLeave this line intact.",
    },
    Challenge {
        prompt: "Change a word",
        solution: "cw",
        hint: "Use 'cw' to change from the cursor to the end of the word.",
        text: "Change this word.\nLeave this line intact.",
    },
    Challenge {
        prompt: "Move down 3 lines",
        solution: "3j",
        hint: "Combine a number with 'j' to move down multiple lines.",
        text: "Line 1\nLine 2\nLine 3\nLine 4\nLine 5",
    },
];
