use super::*;

#[test]
fn returns_closure_result() {
    assert_eq!(ensure_sufficient_stack(|| "rule"), "rule");
}

#[test]
fn nested_block_depth_survives() {
    // Models a tree walk through 50k nested blocks.
    fn depth(n: u32) -> u32 {
        ensure_sufficient_stack(|| if n == 0 { 0 } else { depth(n - 1) + 1 })
    }

    assert_eq!(depth(50_000), 50_000);
}

#[test]
fn propagates_result_values() {
    let result: Result<usize, String> = ensure_sufficient_stack(|| Ok(3));
    assert_eq!(result, Ok(3));
}
