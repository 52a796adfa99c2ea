use crate::parsing::blocks::indent::{leading_indent, opener_rest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

/// A line that looks like a fence, with its indentation in columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceSig {
    pub kind: FenceKind,
    pub indent: usize,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static [u8] = b"```";
    pub const TILDES: &'static [u8] = b"~~~";

    pub fn sig(line: &[u8]) -> Option<FenceSig> {
        let rest = opener_rest(line)?;
        let kind = if rest.starts_with(Self::BACKTICKS) {
            FenceKind::Backticks
        } else if rest.starts_with(Self::TILDES) {
            FenceKind::Tildes
        } else {
            return None;
        };
        Some(FenceSig {
            kind,
            indent: leading_indent(line).0,
        })
    }

    pub fn closes(kind: FenceKind, sig: Option<FenceSig>) -> bool {
        sig.is_some_and(|s| s.kind == kind)
    }
}
