use super::*;

fn font() -> FontDescriptor {
    FontDescriptor::new("monospace", 10.0)
}

#[test]
fn monospace_measures_cells() {
    let metrics = MonospaceMetrics::new(10.0);
    assert_eq!(metrics.measure_width("", &font()), 0.0);
    assert_eq!(metrics.measure_width("Hello", &font()), 50.0);
    assert_eq!(metrics.measure_width("你好", &font()), 40.0);
    assert_eq!(metrics.measure_width("e\u{301}", &font()), 10.0);
}

#[test]
fn monospace_applies_letter_spacing_per_cluster() {
    let metrics = MonospaceMetrics::new(10.0);
    let mut font = font();
    font.letter_spacing = 1.5;
    assert_eq!(metrics.measure_width("abc", &font), 34.5);
}

#[test]
fn table_metrics_scale_with_font_size() {
    let metrics = TableMetrics::new(0.5).with_advance('i', 0.25);
    let font = FontDescriptor::new("serif", 16.0);

    assert_eq!(metrics.measure_width("", &font), 0.0);
    assert_eq!(metrics.measure_width("ii", &font), 8.0);
    assert_eq!(metrics.measure_width("aia", &font), 20.0);
}

#[test]
fn cached_metrics_memoises_and_flushes() {
    let metrics = CachedMetrics::with_capacity(MonospaceMetrics::new(10.0), 2);
    assert_eq!(metrics.measure_width("ab", &font()), 20.0);
    assert_eq!(metrics.measure_width("ab", &font()), 20.0);
    assert_eq!(metrics.cached_len(), 1);

    metrics.measure_width("abc", &font());
    assert_eq!(metrics.cached_len(), 2);
    metrics.measure_width("abcd", &font());
    assert_eq!(metrics.cached_len(), 1);

    metrics.clear();
    assert_eq!(metrics.cached_len(), 0);
}

#[test]
fn offset_at_x_picks_nearest_boundary() {
    let metrics = MonospaceMetrics::new(10.0);
    let font = font();

    assert_eq!(offset_at_x("Hello", -4.0, &metrics, &font), 0);
    assert_eq!(offset_at_x("Hello", 4.0, &metrics, &font), 0);
    assert_eq!(offset_at_x("Hello", 6.0, &metrics, &font), 1);
    assert_eq!(offset_at_x("Hello", 30.0, &metrics, &font), 3);
    assert_eq!(offset_at_x("Hello", 500.0, &metrics, &font), 5);
    assert_eq!(offset_at_x("", 12.0, &metrics, &font), 0);
}

#[test]
fn font_css_shorthand() {
    assert_eq!(FontDescriptor::new("Arial", 12.0).css(), "12px Arial");
}
