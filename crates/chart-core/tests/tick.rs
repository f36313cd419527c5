// File: crates/chart-core/tests/tick.rs
// Purpose: Validate tick unit construction, formatting, and selection.

use chart_core::{
    AxisEdge, AxisScale, ChartError, DecimalFormat, NumberTickUnit, Range, RectF, TickFormatter,
    TickLabelFormat, TickUnit, TickUnitSource, TimestampFormat,
};

const AREA: RectF = RectF::from_ltrb(0.0, 0.0, 100.0, 100.0);

fn decimal(digits: usize) -> TickLabelFormat {
    TickLabelFormat::Decimal(DecimalFormat::new(digits))
}

#[test]
fn non_positive_tick_size_is_rejected() {
    assert_eq!(TickUnit::new(0.0, 0).unwrap_err(), ChartError::InvalidTickSize(0.0));
    assert!(TickUnit::new(-1.0, 0).is_err());
    assert!(TickUnit::new(f64::NAN, 0).is_err());
    assert!(NumberTickUnit::new(0.0, decimal(0)).is_err());
}

#[test]
fn tick_unit_equality_is_structural() {
    let a = NumberTickUnit::new(5.0, decimal(0)).unwrap();
    let b = NumberTickUnit::new(5.0, decimal(0)).unwrap();
    let c = NumberTickUnit::new(5.0, decimal(2)).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn decimal_format_basics() {
    assert_eq!(DecimalFormat::new(0).format_value(5.0), "5");
    assert_eq!(DecimalFormat::new(2).format_value(1.5), "1.50");
    assert_eq!(DecimalFormat::new(1).format_value(-0.25), "-0.2");
}

#[test]
fn decimal_format_grouping() {
    assert_eq!(DecimalFormat::grouped(0).format_value(12500.0), "12,500");
    assert_eq!(DecimalFormat::grouped(2).format_value(-1234.5), "-1,234.50");
    assert_eq!(DecimalFormat::grouped(0).format_value(999.0), "999");
    assert_eq!(DecimalFormat::grouped(0).format_value(1000000.0), "1,000,000");
}

#[test]
fn timestamp_format_epoch_seconds() {
    let f = TimestampFormat::default();
    assert_eq!(f.format_value(0.0), "1970-01-01");
    let f = TimestampFormat::new("%Y-%m-%d %H:%M");
    assert_eq!(f.format_value(86_400.0 + 3_600.0), "1970-01-02 01:00");
}

#[test]
fn selection_picks_smallest_qualifying_unit() {
    // range 0..100 over a 100px extent: one size unit == one pixel
    let source = TickUnitSource::new(vec![1.0, 2.0, 5.0, 10.0, 20.0, 50.0]).unwrap();
    let scale = AxisScale::new(Range::new(0.0, 100.0).unwrap());
    let unit = scale.select_tick_unit(5.0, &AREA, AxisEdge::Bottom, &source);
    assert_eq!(unit.size(), 5.0);
}

#[test]
fn selection_falls_back_to_largest_unit() {
    let source = TickUnitSource::new(vec![1.0, 2.0, 5.0, 10.0, 20.0, 50.0]).unwrap();
    let scale = AxisScale::new(Range::new(0.0, 100.0).unwrap());
    let unit = scale.select_tick_unit(1000.0, &AREA, AxisEdge::Bottom, &source);
    assert_eq!(unit.size(), 50.0);
}

#[test]
fn degenerate_range_selects_smallest_and_yields_single_tick() {
    let source = TickUnitSource::new(vec![1.0, 2.0, 5.0]).unwrap();
    let scale = AxisScale::new(Range::new(5.0, 5.0).unwrap());
    let unit = scale.select_tick_unit(40.0, &AREA, AxisEdge::Bottom, &source);
    assert_eq!(unit.size(), 1.0);

    let ticks = scale.ticks(&unit);
    assert_eq!(ticks.len(), 1);
    assert_eq!(ticks[0].value, 5.0);
}

#[test]
fn ticks_cover_range_at_unit_granularity() {
    let scale = AxisScale::new(Range::new(-2.0, 5.0).unwrap());
    let unit = NumberTickUnit::new(2.0, decimal(0)).unwrap();
    let values: Vec<f64> = scale.ticks(&unit).into_iter().map(|t| t.value).collect();
    assert_eq!(values, vec![-2.0, 0.0, 2.0, 4.0]);
}

#[test]
fn ticks_carry_formatted_labels() {
    let scale = AxisScale::new(Range::new(0.0, 1.0).unwrap());
    let unit = NumberTickUnit::new(0.5, decimal(1)).unwrap();
    let labels: Vec<String> = scale.ticks(&unit).into_iter().map(|t| t.label).collect();
    assert_eq!(labels, vec!["0.0", "0.5", "1.0"]);
}

#[test]
fn standard_source_is_a_1_2_5_ladder() {
    let source = TickUnitSource::standard();
    let sizes = source.sizes();
    assert!(sizes.windows(2).all(|w| w[0] < w[1]));
    for expect in [0.1, 0.2, 0.5, 1.0, 2.0, 5.0, 10.0] {
        assert!(
            sizes.iter().any(|&s| (s - expect).abs() < 1e-12),
            "missing candidate {expect}"
        );
    }
}

#[test]
fn source_rejects_invalid_candidates() {
    assert!(TickUnitSource::new(vec![]).is_err());
    assert!(TickUnitSource::new(vec![1.0, 0.0]).is_err());
    assert!(TickUnitSource::new(vec![-5.0]).is_err());
}

#[test]
fn source_with_explicit_format_labels_all_units() {
    let day = 86_400.0;
    let source = TickUnitSource::with_format(
        vec![day, 7.0 * day],
        TickLabelFormat::Timestamp(TimestampFormat::default()),
    )
    .unwrap();
    assert_eq!(source.unit_for(day).value_to_string(0.0), "1970-01-01");
    assert_eq!(source.unit_for(7.0 * day).value_to_string(7.0 * day), "1970-01-08");
}

#[test]
fn source_units_format_to_magnitude() {
    let source = TickUnitSource::standard();
    assert_eq!(source.unit_for(0.2).value_to_string(0.2), "0.2");
    assert_eq!(source.unit_for(5.0).value_to_string(25.0), "25");
}
