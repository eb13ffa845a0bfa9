//! The state machine driver
//!
//! One transition function per state, dispatched from [Driver::feed]. A transition either
//! moves to the next state, reports "no transition" (`Ok(None)`), or fails with the
//! registry syntax error. Only the top-level state and the item value state reject
//! tokens explicitly; every other unmatched branch is a silent halt, and the caller
//! decides what to make of it.
//!
//! Branches that need a particular node kind (a structure body needs a structure, an
//! attribute body needs a nested attribute) halt when the node is of another kind.

use super::error::ParseError;
use super::state::{Resume, State};
use crate::registry::ast::{
    Attribute, PosAttribute, RegistryConf, RegistryItem, RegistryNode, SimpleAttr, Struct,
    StructItem,
};
use crate::registry::backend::{BackendError, RegistryBackend};
use crate::registry::token::{
    is_comment, is_end, is_key, is_value, ATTRIBUTE, CLOSE, END, OPEN, STRUCTURE,
};

pub struct Driver<B> {
    root: RegistryConf<B>,
    /// The top-level node being built; finalized into `root` by the next top-level key
    /// or by [Driver::finish].
    node: Option<RegistryItem>,
    posattr_idx: usize,
    state: State,
}

impl<B: RegistryBackend> Driver<B> {
    pub fn new(root: RegistryConf<B>) -> Self {
        Self {
            root,
            node: None,
            posattr_idx: 0,
            state: State::TopLevel,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn node_type(&self) -> Option<&'static str> {
        self.node.as_ref().map(|node| node.node_type())
    }

    /// Apply the current state's transition to `token`.
    pub fn feed(&mut self, index: usize, token: &str) -> Result<Option<State>, ParseError> {
        let next = match self.state {
            State::TopLevel => self.top_level(index, token)?,
            State::ItemValue => self.item_value(index, token)?,
            State::ItemEnd => item_end(token),
            State::Comment { resume } => Some(if is_end(token) {
                resume.state()
            } else {
                self.state
            }),
            State::StructBody => self.struct_body(token),
            State::StructItemValue => self.struct_item_value(token),
            State::StructItemEnd => struct_item_end(token),
            State::AttributeBody => self.attribute_body(token),
            State::AttributeItemValue => self.attribute_item_value(token),
            State::AttributeItemEnd => attribute_item_end(token),
        };
        if let Some(next) = next {
            self.state = next;
        }
        Ok(next)
    }

    /// Finalize the in-progress node, if any, and hand back the root.
    pub fn finish(mut self) -> Result<(RegistryConf<B>, State), BackendError> {
        if let Some(item) = self.node.take() {
            self.root.add_item(item)?;
        }
        Ok((self.root, self.state))
    }

    fn top_level(&mut self, index: usize, token: &str) -> Result<Option<State>, ParseError> {
        if is_end(token) {
            return Ok(Some(State::TopLevel));
        }
        if is_comment(token) {
            return Ok(Some(State::Comment {
                resume: Resume::TopLevel,
            }));
        }
        if is_key(token) {
            if let Some(item) = self.node.take() {
                self.root.add_item(item)?;
            }
            let item: RegistryItem = match token {
                ATTRIBUTE => {
                    let attr = PosAttribute::new(self.posattr_idx, token);
                    self.posattr_idx += 1;
                    attr.into()
                }
                STRUCTURE => Struct::new(token).into(),
                _ => SimpleAttr::new(token).into(),
            };
            self.node = Some(item);
            return Ok(Some(State::ItemValue));
        }
        Err(ParseError::Syntax {
            state: State::TopLevel,
            index,
            token: token.to_string(),
        })
    }

    fn item_value(&mut self, index: usize, token: &str) -> Result<Option<State>, ParseError> {
        if !is_value(token) {
            return Err(ParseError::Syntax {
                state: State::ItemValue,
                index,
                token: token.to_string(),
            });
        }
        match self.node.as_mut() {
            Some(RegistryItem::Simple(attr)) => attr.value = Some(token.to_string()),
            Some(RegistryItem::PosAttribute(attr)) => attr.name = token.to_string(),
            Some(RegistryItem::Struct(s)) => s.name = token.to_string(),
            None => return Ok(None),
        }
        Ok(Some(State::ItemEnd))
    }

    fn struct_body(&mut self, token: &str) -> Option<State> {
        if token == CLOSE {
            return Some(State::TopLevel);
        }
        if is_key(token) {
            let s = self.current_struct()?;
            if token == ATTRIBUTE {
                s.new_item(Attribute::new().into());
            } else {
                s.new_item(SimpleAttr::new(token).into());
            }
            return Some(State::StructItemValue);
        }
        if is_end(token) {
            return Some(State::StructBody);
        }
        if is_comment(token) {
            return Some(State::Comment {
                resume: Resume::StructBody,
            });
        }
        None
    }

    fn struct_item_value(&mut self, token: &str) -> Option<State> {
        if !is_value(token) {
            return None;
        }
        match self.current_struct()?.last_item_mut()? {
            StructItem::Attribute(attr) => attr.name = Some(token.to_string()),
            StructItem::Simple(attr) => attr.value = Some(token.to_string()),
        }
        Some(State::StructItemEnd)
    }

    fn attribute_body(&mut self, token: &str) -> Option<State> {
        if is_key(token) {
            self.current_attribute()?.new_item(SimpleAttr::new(token));
            return Some(State::AttributeItemValue);
        }
        if is_end(token) {
            return Some(State::AttributeBody);
        }
        if token == CLOSE {
            return Some(State::StructBody);
        }
        if is_comment(token) {
            return Some(State::Comment {
                resume: Resume::AttributeBody,
            });
        }
        None
    }

    fn attribute_item_value(&mut self, token: &str) -> Option<State> {
        if !is_value(token) {
            return None;
        }
        self.current_attribute()?.last_item_mut()?.value = Some(token.to_string());
        Some(State::AttributeItemEnd)
    }

    fn current_struct(&mut self) -> Option<&mut Struct> {
        match self.node.as_mut()? {
            RegistryItem::Struct(s) => Some(s),
            _ => None,
        }
    }

    fn current_attribute(&mut self) -> Option<&mut Attribute> {
        match self.current_struct()?.last_item_mut()? {
            StructItem::Attribute(attr) => Some(attr),
            StructItem::Simple(_) => None,
        }
    }
}

fn item_end(token: &str) -> Option<State> {
    match token {
        END => Some(State::TopLevel),
        OPEN => Some(State::StructBody),
        _ => None,
    }
}

fn struct_item_end(token: &str) -> Option<State> {
    match token {
        END => Some(State::StructBody),
        OPEN => Some(State::AttributeBody),
        _ => None,
    }
}

fn attribute_item_end(token: &str) -> Option<State> {
    if is_end(token) {
        Some(State::AttributeBody)
    } else {
        None
    }
}
