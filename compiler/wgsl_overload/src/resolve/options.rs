//! Resolver configuration.

use bitflags::bitflags;
use wgsl_types::ScalarKind;

bitflags! {
    /// WGSL language extensions enabled by the shader.
    ///
    /// Set from the module's `enable` directives.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct Extensions: u8 {
        /// `enable f16;`: the `f16` scalar type.
        const F16 = 1 << 0;
    }
}

impl Extensions {
    /// The extension a scalar kind requires, if any.
    pub const fn required_by(kind: ScalarKind) -> Option<(Self, &'static str)> {
        match kind {
            ScalarKind::Half => Some((Self::F16, "f16")),
            ScalarKind::Bool | ScalarKind::Int | ScalarKind::UInt | ScalarKind::Float => None,
        }
    }
}

/// Options for a [`Resolver`](super::Resolver).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct ResolverOptions {
    pub extensions: Extensions,
}

impl ResolverOptions {
    #[must_use]
    pub fn with_extensions(mut self, extensions: Extensions) -> Self {
        self.extensions |= extensions;
        self
    }
}
