use crate::model::{Layout, PackResult};
use serde_json::{Value, json};

/// Serialize a `PackResult` as `{ canvas, frames, stats }`.
/// Frames are listed in input order and carry their input `index`.
pub fn to_json(result: &PackResult) -> Value {
    let frames: Vec<Value> = result
        .placements
        .iter()
        .enumerate()
        .map(|(i, r)| json!({"index": i, "x": r.x, "y": r.y, "w": r.w, "h": r.h}))
        .collect();
    json!({
        "canvas": {"w": result.canvas_width, "h": result.canvas_height},
        "frames": frames,
        "stats": result.stats(),
    })
}

/// Same shape as [`to_json`] with a `key` per frame instead of an index.
pub fn layout_to_json<K: ToString>(layout: &Layout<K>) -> Value {
    let frames: Vec<Value> = layout
        .frames
        .iter()
        .map(|fr| {
            json!({
                "key": fr.key.to_string(),
                "x": fr.frame.x,
                "y": fr.frame.y,
                "w": fr.frame.w,
                "h": fr.frame.h,
            })
        })
        .collect();
    json!({
        "canvas": {"w": layout.width, "h": layout.height},
        "frames": frames,
        "stats": layout.stats(),
    })
}
