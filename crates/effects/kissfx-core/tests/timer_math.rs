use kissfx_core::{config::Config, controller::EffectController, timer::EffectTimer};
use kissfx_test_fixtures::seeded_host;

/// it should stop exactly once, at the first tick where cumulative elapsed
/// crosses the duration, for an arbitrary dt sequence
#[test]
fn stops_at_first_crossing_tick() {
    let dts = [0.3_f32, 0.0, 0.7, 0.25, 0.1, 0.9, 0.5];
    let duration = 2.0_f32;

    let (mut host, target, originals, effect) = seeded_host(1);
    let mut ctrl = EffectController::new(target, &Config::default());
    ctrl.play_once(&mut host, effect, duration, None, None);

    let mut elapsed = 0.0_f32;
    let mut stop_ticks = 0;
    for dt in dts {
        let was_playing = ctrl.is_playing();
        ctrl.tick(&mut host, dt);
        elapsed += dt;
        if was_playing && !ctrl.is_playing() {
            stop_ticks += 1;
            assert!(elapsed >= duration, "stopped before crossing: {elapsed}");
            // Restoration is observable at the stopping tick.
            assert_eq!(host.slots(target).unwrap(), originals.as_slice());
        } else if ctrl.is_playing() {
            assert!(elapsed < duration, "kept playing past crossing: {elapsed}");
        }
    }
    assert_eq!(stop_ticks, 1);
}

/// it should strictly increase progress within a loop cycle and reset to 0
/// without ever exceeding 1, indefinitely
#[test]
fn loop_progress_monotone_within_cycle() {
    let (mut host, target, _originals, effect) = seeded_host(1);
    let mut ctrl = EffectController::new(target, &Config::default());
    ctrl.play_loop(&mut host, effect, 1.0);
    let instance = host.slots(target).unwrap()[0];

    let mut last = -1.0_f32;
    for i in 0..400 {
        ctrl.tick(&mut host, 0.03);
        let p = host.float_property(instance, "_Progress01").unwrap();
        assert!((0.0..=1.0).contains(&p), "progress out of range at tick {i}: {p}");
        if ctrl.elapsed() == 0.0 {
            // Wrap frame: observed at 1, next cycle restarts below.
            assert_eq!(p, 1.0);
            last = -1.0;
        } else {
            assert!(p > last, "progress not increasing at tick {i}: {p} <= {last}");
            last = p;
        }
        assert!(ctrl.is_playing());
    }
}

/// it should keep timer progress clamped across overshooting advances
#[test]
fn timer_clamps_overshoot() {
    let mut t = EffectTimer::new(0.5);
    t.advance(10.0);
    assert_eq!(t.progress(), 1.0);
    assert!(t.is_complete());
    t.reset();
    assert_eq!(t.progress(), 0.0);
    assert!(!t.is_complete());
}
