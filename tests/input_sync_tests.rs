use radar_rs::api::InputPanel;
use radar_rs::core::{AxisRegistry, PresetRegistry, ValueMap};

fn panel() -> InputPanel {
    let registry = AxisRegistry::skill_profile();
    let defaults = PresetRegistry::user_defaults(&registry).expect("defaults");
    InputPanel::new(&registry, &defaults)
}

#[test]
fn number_edits_clamp_and_coerce() {
    let mut panel = panel();

    assert_eq!(panel.edit_number("coreTech", "-5").expect("edit"), 0);
    assert_eq!(panel.edit_number("coreTech", "150").expect("edit"), 100);
    assert_eq!(panel.edit_number("coreTech", "abc").expect("edit"), 0);
    assert_eq!(panel.edit_number("coreTech", "").expect("edit"), 0);
    assert_eq!(panel.edit_number("coreTech", "42").expect("edit"), 42);
}

#[test]
fn both_controls_agree_after_any_single_edit() {
    let mut panel = panel();

    for v in [0u8, 1, 33, 67, 99, 100] {
        panel.edit_slider("uiux", v).expect("slider edit");
        let pair = panel.pair("uiux").expect("pair exists");
        assert_eq!(pair.slider(), v);
        assert_eq!(pair.number(), v);

        panel.edit_number("uiux", &v.to_string()).expect("number edit");
        let pair = panel.pair("uiux").expect("pair exists");
        assert_eq!(pair.slider(), v);
        assert_eq!(pair.number(), v);
    }
}

#[test]
fn decimal_entry_rounds_like_the_raw_write_path() {
    let mut panel = panel();

    assert_eq!(panel.edit_number("coreTech", "12.5").expect("edit"), 13);
    assert_eq!(panel.set_value("coreTech", 12.5).expect("write"), 13);

    assert_eq!(panel.edit_number("coreTech", "99.4").expect("edit"), 99);
    assert_eq!(panel.set_value("coreTech", 99.4).expect("write"), 99);
}

#[test]
fn value_map_reflects_edit_before_caller_renders() {
    let mut panel = panel();

    panel.edit_number("power", "250").expect("edit");
    assert_eq!(panel.values().get_or_zero("power"), 100);

    panel.edit_slider("power", 12).expect("edit");
    assert_eq!(panel.values().get_or_zero("power"), 12);
}

#[test]
fn numeric_control_self_corrects_out_of_range_entry() {
    let mut panel = panel();

    panel.edit_number("emerging", "9999").expect("edit");
    let pair = panel.pair("emerging").expect("pair exists");
    assert_eq!(pair.number(), 100);
    assert_eq!(pair.slider(), 100);
}

#[test]
fn reset_and_fill_overwrite_every_pair() {
    let registry = AxisRegistry::skill_profile();
    let defaults = PresetRegistry::user_defaults(&registry).expect("defaults");
    let mut panel = InputPanel::new(&registry, &defaults);

    panel.reset_to_zero();
    for axis in registry.iter() {
        assert_eq!(panel.values().get_or_zero(&axis.key), 0);
        assert_eq!(panel.pair(&axis.key).expect("pair").value(), 0);
    }

    panel.set_all(&defaults);
    assert_eq!(panel.values().get_or_zero("emerging"), 40);
    assert_eq!(panel.pair("emerging").expect("pair").value(), 40);
}

#[test]
fn panel_seeds_missing_initial_keys_at_zero() {
    let registry = AxisRegistry::skill_profile();
    let partial = ValueMap::from_pairs(&registry, &[("coreTech", 80)]).expect("partial values");
    let panel = InputPanel::new(&registry, &partial);

    assert_eq!(panel.values().get_or_zero("coreTech"), 80);
    assert_eq!(panel.values().get_or_zero("practices"), 0);
}

#[test]
fn unknown_axis_edit_is_rejected() {
    let mut panel = panel();
    assert!(panel.edit_slider("doesNotExist", 10).is_err());
    assert!(panel.edit_number("doesNotExist", "10").is_err());
}
