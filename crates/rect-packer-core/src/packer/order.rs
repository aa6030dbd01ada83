use crate::model::Size;

/// Returns input indices in placement order: descending `w + h`.
///
/// The sort is stable, so rectangles with equal keys stay in input order and form one
/// contiguous shelf group.
pub fn placement_order(sizes: &[Size]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..sizes.len()).collect();
    order.sort_by(|&a, &b| sizes[b].semi_perimeter().cmp(&sizes[a].semi_perimeter()));
    order
}
