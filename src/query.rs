//! Boolean-mode full-text query synthesis.
//!
//! [`BooleanQueryBuilder`] expands each word of a phrase and renders one group
//! per word through a [`BooleanQuerySyntax`]. The default
//! [`RequiredPrefixSyntax`] targets engines that understand `+term*` required
//! prefix terms inside parenthesized groups.

pub mod builder;
pub mod syntax;

pub use builder::BooleanQueryBuilder;
pub use syntax::{BooleanQuerySyntax, RESERVED_CHARS, RequiredPrefixSyntax, SanitizingSyntax};
