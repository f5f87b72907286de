mod common;

use ndarray::{s, Array1, Array2, Array3, ArrayView3, Axis};

use common::{pixel_index_waveforms, single_peak_waveforms};
use gainsel_core::channel::GainChannel;
use gainsel_core::selector::{GainSelector, ManualGainSelector, ThresholdGainSelector};

/// Selector that always picks high gain, exercising only the shared shape handling.
struct AlwaysHigh;

impl GainSelector<i64> for AlwaysHigh {
    fn name(&self) -> &'static str {
        "always-high"
    }

    fn select_channel(&self, waveforms: ArrayView3<'_, i64>) -> Array1<usize> {
        Array1::from_elem(waveforms.len_of(Axis(1)), GainChannel::High.index())
    }
}

/// Selector returning an out-of-range channel for every pixel.
struct Broken;

impl GainSelector<f32> for Broken {
    fn name(&self) -> &'static str {
        "broken"
    }

    fn select_channel(&self, waveforms: ArrayView3<'_, f32>) -> Array1<usize> {
        Array1::from_elem(waveforms.len_of(Axis(1)), 7)
    }
}

#[test]
fn test_shared_shape_handling() {
    let waveforms = pixel_index_waveforms(2048, 128);
    let gs = AlwaysHigh;

    let reduced = gs.apply(waveforms.view().into_dyn()).unwrap();
    assert_eq!(reduced, waveforms.index_axis(Axis(0), 0));

    let high = waveforms.index_axis(Axis(0), 0);
    let reduced = gs.apply(high.into_dyn()).unwrap();
    assert_eq!(reduced, high);

    let singleton = waveforms.slice(s![0..1, .., ..]);
    let reduced = gs.apply(singleton.into_dyn()).unwrap();
    assert_eq!(reduced, high);
}

#[test]
fn test_rank2_passthrough_is_identity() {
    let data = Array2::from_shape_fn((5, 7), |(p, s)| (p * 7 + s) as f32 * 0.5);
    let gs = ThresholdGainSelector::new(0.0).unwrap();
    let selection = gs.apply_with_selection(data.view().into_dyn()).unwrap();
    assert_eq!(selection.waveforms, data);
    assert!(selection.is_passthrough());
    assert_eq!(selection.count(GainChannel::Low), 0);
}

#[test]
fn test_singleton_channel_skips_policy() {
    // Broken would fail the gather; a singleton channel axis never reaches it.
    let data = Array3::from_shape_fn((1, 4, 6), |(_, p, s)| (p + s) as f32);
    let reduced = Broken.apply(data.view().into_dyn()).unwrap();
    assert_eq!(reduced, data.index_axis(Axis(0), 0));
}

#[test]
fn test_manual_high_and_low() {
    let waveforms = pixel_index_waveforms(2048, 128);

    let gs_high = ManualGainSelector::from_name("HIGH").unwrap();
    let reduced = gs_high.apply(waveforms.view().into_dyn()).unwrap();
    assert_eq!(reduced, waveforms.index_axis(Axis(0), GainChannel::High.index()));

    let gs_low = ManualGainSelector::from_name("LOW").unwrap();
    let reduced = gs_low.apply(waveforms.view().into_dyn()).unwrap();
    assert_eq!(reduced, waveforms.index_axis(Axis(0), GainChannel::Low.index()));
    assert_eq!(reduced[[10, 3]], 20);
}

#[test]
fn test_manual_ignores_data() {
    let mut waveforms = Array3::<f32>::zeros((2, 3, 4));
    waveforms.slice_mut(s![0, .., ..]).fill(1e9);
    let gs = ManualGainSelector::new(GainChannel::High);
    let selection = gs.apply_with_selection(waveforms.view().into_dyn()).unwrap();
    assert_eq!(selection.channels.unwrap(), Array1::from_elem(3, 0usize));
}

#[test]
fn test_manual_rejects_unknown_channel() {
    let err = ManualGainSelector::from_name("MEDIUM").unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn test_threshold_switches_saturated_pixel() {
    let waveforms = single_peak_waveforms(2048, 128, 100.0);
    let gs = ThresholdGainSelector::new(50.0).unwrap();
    let selection = gs.apply_with_selection(waveforms.view().into_dyn()).unwrap();

    assert!(selection.waveforms.row(0).iter().all(|&v| v == 1.0));
    assert!(selection
        .waveforms
        .slice(s![1.., ..])
        .iter()
        .all(|&v| v == 0.0));
    assert_eq!(selection.count(GainChannel::Low), 1);
    assert_eq!(selection.count(GainChannel::High), 2047);
}

#[test]
fn test_threshold_tie_stays_high() {
    let waveforms = single_peak_waveforms(4, 8, 50.0);
    let gs = ThresholdGainSelector::new(50.0).unwrap();
    let reduced = gs.apply(waveforms.view().into_dyn()).unwrap();
    assert_eq!(reduced[[0, 0]], 50.0);
    assert!(reduced.slice(s![0, 1..]).iter().all(|&v| v == 0.0));
}

#[test]
fn test_threshold_integer_samples() {
    let mut waveforms = Array3::<u16>::zeros((2, 3, 5));
    waveforms.slice_mut(s![1, .., ..]).fill(7);
    waveforms[[0, 2, 4]] = 4095;
    let gs = ThresholdGainSelector::new(4000.0).unwrap();
    let selection = gs.apply_with_selection(waveforms.view().into_dyn()).unwrap();
    assert_eq!(selection.channels.unwrap().to_vec(), vec![0, 0, 1]);
    assert!(selection.waveforms.row(2).iter().all(|&v| v == 7));
}

#[test]
fn test_repeated_apply_is_identical() {
    let waveforms = single_peak_waveforms(300, 16, 75.0);
    let gs = ThresholdGainSelector::new(50.0).unwrap();
    let first = gs.apply(waveforms.view().into_dyn()).unwrap();
    for _ in 0..3 {
        let again = gs.apply(waveforms.view().into_dyn()).unwrap();
        assert_eq!(again, first);
    }
}

#[test]
fn test_three_channels_rejected() {
    let waveforms = Array3::<f32>::zeros((3, 4, 8));
    let gs = ManualGainSelector::new(GainChannel::Low);
    let err = gs.apply(waveforms.view().into_dyn()).unwrap_err();
    assert!(err.is_shape());
}

#[test]
fn test_bad_rank_rejected() {
    let gs = ThresholdGainSelector::default();
    let flat = Array1::<f32>::zeros(16);
    assert!(gs.apply(flat.view().into_dyn()).unwrap_err().is_shape());
    let rank4 = ndarray::Array4::<f32>::zeros((2, 2, 3, 4));
    assert!(gs.apply(rank4.view().into_dyn()).unwrap_err().is_shape());
}

#[test]
fn test_invalid_selection_rejected() {
    let waveforms = Array3::<f32>::zeros((2, 4, 8));
    let err = Broken.apply(waveforms.view().into_dyn()).unwrap_err();
    assert!(err.is_shape());
}

#[test]
fn test_input_not_mutated() {
    let waveforms = single_peak_waveforms(16, 8, 100.0);
    let before = waveforms.clone();
    let gs = ThresholdGainSelector::new(50.0).unwrap();
    let _ = gs.apply(waveforms.view().into_dyn()).unwrap();
    assert_eq!(waveforms, before);
}

#[test]
fn test_selector_shared_across_threads() {
    let gs: Box<dyn GainSelector<f64>> = Box::new(ThresholdGainSelector::new(50.0).unwrap());
    let waveforms = single_peak_waveforms(64, 8, 100.0);
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let reduced = gs.apply(waveforms.view().into_dyn()).unwrap();
                assert_eq!(reduced[[0, 3]], 1.0);
                assert_eq!(reduced[[1, 3]], 0.0);
            });
        }
    });
}
