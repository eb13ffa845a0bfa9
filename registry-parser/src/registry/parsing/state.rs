//! Parser states
//!
//! The numbering in [State::label] is the one used in diagnostics and trace output.
//! Comments are a single state that remembers where to resume once the comment's `$`
//! arrives.

use std::fmt;

/// Where a comment hands control back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resume {
    TopLevel,
    StructBody,
    AttributeBody,
}

impl Resume {
    pub fn state(self) -> State {
        match self {
            Resume::TopLevel => State::TopLevel,
            Resume::StructBody => State::StructBody,
            Resume::AttributeBody => State::AttributeBody,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// 0: top level, awaiting a new item or an end of statement
    TopLevel,
    /// 1: awaiting the value (or name) of the item just created
    ItemValue,
    /// 2: awaiting the end of the statement or a structure body
    ItemEnd,
    /// 3, 3b, 3c: inside a comment, consuming tokens up to `$`
    Comment { resume: Resume },
    /// 4: inside a structure body
    StructBody,
    /// 5: awaiting the value (or name) of the nested item just appended
    StructItemValue,
    /// 6: awaiting the end of a nested statement or an attribute body
    StructItemEnd,
    /// 7: inside an attribute body
    AttributeBody,
    /// 8: awaiting the value of the attribute's sub-item just appended
    AttributeItemValue,
    /// 9: awaiting the end of a sub-statement
    AttributeItemEnd,
}

impl State {
    pub fn label(&self) -> &'static str {
        match self {
            State::TopLevel => "0",
            State::ItemValue => "1",
            State::ItemEnd => "2",
            State::Comment {
                resume: Resume::TopLevel,
            } => "3",
            State::Comment {
                resume: Resume::StructBody,
            } => "3b",
            State::Comment {
                resume: Resume::AttributeBody,
            } => "3c",
            State::StructBody => "4",
            State::StructItemValue => "5",
            State::StructItemEnd => "6",
            State::AttributeBody => "7",
            State::AttributeItemValue => "8",
            State::AttributeItemEnd => "9",
        }
    }

    /// States in which a statement may legitimately be interrupted by end of input
    /// without losing anything: nothing is pending.
    pub fn is_resting(&self) -> bool {
        matches!(
            self,
            State::TopLevel
                | State::Comment {
                    resume: Resume::TopLevel
                }
        )
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
