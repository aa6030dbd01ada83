use rect_packer_core::prelude::*;

#[test]
fn export_json_smoke() {
    let sizes = vec![Size::new(32, 16), Size::new(10, 10)];
    let out = pack(&sizes).expect("pack");

    let v = rect_packer_core::to_json(&out);
    let obj = v.as_object().expect("object");
    assert!(obj.contains_key("canvas"));
    assert!(obj.contains_key("frames"));
    assert!(obj.contains_key("stats"));
    assert_eq!(v["canvas"]["w"], out.canvas_width);
    assert_eq!(v["canvas"]["h"], out.canvas_height);
    let frames = v["frames"].as_array().expect("array");
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[1]["index"], 1);
    assert_eq!(frames[1]["w"], 10);
}

#[test]
fn export_layout_json_keeps_keys_in_input_order() {
    let items = vec![("small", 4, 4), ("big", 30, 20), ("mid", 10, 10)];
    let layout = pack_layout(items, PackerConfig::default()).expect("pack");
    let keys: Vec<&str> = layout.frames.iter().map(|f| f.key.as_str()).collect();
    assert_eq!(keys, ["small", "big", "mid"]);
    assert_eq!(layout.frames[1].frame.x, 0);
    assert_eq!(layout.frames[1].frame.y, 0);

    let v = rect_packer_core::layout_to_json(&layout);
    assert_eq!(v["frames"][0]["key"], "small");
    assert_eq!(v["canvas"]["w"], layout.width);
}

#[test]
fn pack_result_round_trips_through_serde() {
    let out = pack(&[Size::new(3, 5), Size::new(5, 3)]).expect("pack");
    let s = serde_json::to_string(&out).expect("serialize");
    let back: PackResult = serde_json::from_str(&s).expect("deserialize");
    assert_eq!(back, out);
}
