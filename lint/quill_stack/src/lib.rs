//! Stack safety for recursive walks over stylesheet trees.
//!
//! Nested at-rules and rules (`@media { @supports { a { b { ... } } } }`)
//! have no depth limit in source, so the tree visitor recurses through
//! [`ensure_sufficient_stack`] instead of trusting the thread's stack size.
//!
//! - **Native targets**: `stacker` grows the stack on demand.
//! - **WASM targets**: plain call; the runtime manages its own stack.
//!
//! Value tokenization does not use this: it bounds function nesting with an
//! explicit depth counter instead.

/// Remaining stack below which a new segment is allocated (64KB).
const RED_ZONE: usize = 64 * 1024;

/// Size of each newly allocated stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn walk_nodes(nodes: &[Node], visitor: &mut impl Visitor) {
///     for node in nodes {
///         ensure_sufficient_stack(|| walk_node(node, visitor));
///     }
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version: call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
