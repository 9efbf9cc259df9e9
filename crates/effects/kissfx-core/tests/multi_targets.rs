use kissfx_core::{Config, EffectEngine, EffectEvent, Inputs, ParamValue};
use kissfx_test_fixtures::MemoryHost;

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

/// it should play independently on two targets under one engine
#[test]
fn two_targets_play_independently() {
    let mut host = MemoryHost::new();
    let mut eng = EffectEngine::new(Config::default());

    let a = eng.create_target();
    let b = eng.create_target();
    let orig_a = host.add_material(&[]);
    let orig_b0 = host.add_material(&[]);
    let orig_b1 = host.add_material(&[]);
    host.add_target(a, vec![orig_a]);
    host.add_target(b, vec![orig_b0, orig_b1]);
    let effect = host.add_material(&[("_Progress01", ParamValue::Float(0.0))]);

    eng.play_once(&mut host, a, effect, 1.0, None, None);
    eng.play_loop(&mut host, b, effect, 2.0);

    eng.update(&mut host, 0.5, Inputs::default());
    let inst_a = host.slots(a).unwrap()[0];
    let inst_b = host.slots(b).unwrap()[0];
    approx(host.float_property(inst_a, "_Progress01").unwrap(), 0.5, 1e-6);
    approx(host.float_property(inst_b, "_Progress01").unwrap(), 0.25, 1e-6);

    // Crossing a's duration stops only a.
    let out = eng.update(&mut host, 0.5, Inputs::default());
    assert!(out.events.contains(&EffectEvent::Completed { target: a }));
    assert!(!out.events.iter().any(|e| matches!(e, EffectEvent::Completed { target } if *target == b)));
    assert_eq!(host.slots(a).unwrap(), &[orig_a]);
    assert!(eng.controller(b).unwrap().is_playing());
}

/// it should emit Started events with the loop flag per target
#[test]
fn started_events_carry_loop_flag() {
    let mut host = MemoryHost::new();
    let mut eng = EffectEngine::new(Config::default());
    let a = eng.create_target();
    let orig = host.add_material(&[]);
    host.add_target(a, vec![orig]);
    let effect = host.add_material(&[("_Progress01", ParamValue::Float(0.0))]);

    eng.play_loop(&mut host, a, effect, 1.0);
    let out = eng.update(&mut host, 0.0, Inputs::default());
    assert!(out
        .events
        .contains(&EffectEvent::Started { target: a, looping: true }));
}

/// it should tear a target down on removal: originals restored, instances
/// destroyed, controller forgotten
#[test]
fn remove_target_restores_and_forgets() {
    let mut host = MemoryHost::new();
    let mut eng = EffectEngine::new(Config::default());
    let a = eng.create_target();
    let orig = host.add_material(&[]);
    host.add_target(a, vec![orig]);
    let effect = host.add_material(&[("_Progress01", ParamValue::Float(0.0))]);

    eng.play_loop(&mut host, a, effect, 1.0);
    eng.update(&mut host, 0.25, Inputs::default());
    assert!(!host.live_instances().is_empty());

    eng.remove_target(&mut host, a);
    assert!(eng.controller(a).is_none());
    assert_eq!(host.slots(a).unwrap(), &[orig]);
    assert!(host.live_instances().is_empty());
}
