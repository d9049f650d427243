//! Tests for particle updates, trail sparks, detonation and the launch policy.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use fireworks_core::colour::Colour;
use fireworks_core::constants::*;
use fireworks_core::enums::EntityKind;
use fireworks_core::types::Vector;
use fireworks_core::viewport::Viewport;

use crate::particle::{flicker_gold, Particle, ParticleKind};
use crate::random::{RandomSource, SequenceRandom};
use crate::systems::{self, cleanup, detonation, launch, render, trail};

const NO_ACCEL: Vector = Vector::ZERO;

fn big_viewport() -> Viewport {
    Viewport::new(1000, 1000)
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn hovering_spark(lifespan: Option<f64>) -> Particle {
    Particle::spark(Vector::new(0.0, 0.5), Vector::ZERO, Colour::WHITE, lifespan)
}

// ---- Base particle ----

#[test]
fn test_semi_implicit_euler() {
    let mut rng = SequenceRandom::constant(0.0);
    let p = Particle::spark(
        Vector::new(0.1, 0.2),
        Vector::new(0.01, 0.3),
        Colour::WHITE,
        None,
    );

    let out = p.update(0.5, Vector::new(0.0, -0.1), &big_viewport(), &mut rng);
    assert_eq!(out.len(), 1);
    let p = &out[0];
    assert!(approx(p.velocity.x, 0.01) && approx(p.velocity.y, 0.25));
    assert!(approx(p.position.x, 0.105) && approx(p.position.y, 0.325));
    assert!(approx(p.age, 0.5));
}

#[test]
fn test_leaves_viewport_scenario() {
    let mut rng = SequenceRandom::constant(0.0);
    let p = Particle::spark(Vector::ZERO, Vector::ZERO, Colour::WHITE, None);
    let viewport = Viewport::new(2, 2);

    let mut moved = p.clone();
    moved.age += 1.0;
    systems::movement::integrate(&mut moved.position, &mut moved.velocity, GRAVITY, 1.0);
    assert!(approx(moved.velocity.y, -0.1));
    assert!(approx(moved.position.y, -0.1));
    assert!(!cleanup::is_visible(&moved, &viewport));

    let out = p.update(1.0, GRAVITY, &viewport, &mut rng);
    assert!(out.is_empty(), "Particle below the floor should die");
}

#[test]
fn test_leaves_viewport_sideways() {
    let mut rng = SequenceRandom::constant(0.0);
    let viewport = Viewport::new(100, 100);
    let p = Particle::spark(Vector::new(0.99, 0.5), Vector::new(1.0, 0.0), Colour::WHITE, None);
    assert!(p.update(0.1, NO_ACCEL, &viewport, &mut rng).is_empty());

    let p = Particle::spark(Vector::new(-0.99, 0.5), Vector::new(-1.0, 0.0), Colour::WHITE, None);
    assert!(p.update(0.1, NO_ACCEL, &viewport, &mut rng).is_empty());
}

#[test]
fn test_above_viewport_survives() {
    let mut rng = SequenceRandom::constant(0.0);
    let p = Particle::spark(Vector::new(0.0, 50.0), Vector::new(0.0, 1.0), Colour::WHITE, None);
    let out = p.update(1.0, NO_ACCEL, &Viewport::new(100, 100), &mut rng);
    assert_eq!(out.len(), 1, "There is no top edge");
}

#[test]
fn test_lifespan_expiry_tick() {
    let mut rng = SequenceRandom::constant(0.0);
    let viewport = big_viewport();
    let mut p = hovering_spark(Some(1.0));

    for tick in 1..=3 {
        let mut out = p.update(0.25, NO_ACCEL, &viewport, &mut rng);
        assert_eq!(out.len(), 1, "Should survive tick {tick} (age < lifespan)");
        p = out.remove(0);
    }
    assert!(approx(p.age, 0.75));

    let out = p.update(0.25, NO_ACCEL, &viewport, &mut rng);
    assert!(out.is_empty(), "Should expire once age reaches lifespan");
}

#[test]
fn test_age_never_overshoots_by_more_than_dt() {
    let mut rng = SequenceRandom::constant(0.0);
    let viewport = big_viewport();
    let dt = 0.3;
    let mut p = hovering_spark(Some(1.0));
    loop {
        let mut out = p.clone().update(dt, NO_ACCEL, &viewport, &mut rng);
        if out.is_empty() {
            assert!(p.age + dt - 1.0 < dt);
            break;
        }
        p = out.remove(0);
        assert!(p.age < 1.0);
    }
}

#[test]
fn test_immortal_never_expires_by_age() {
    let mut rng = SequenceRandom::constant(0.0);
    let viewport = big_viewport();
    let mut p = hovering_spark(None);
    for _ in 0..10_000 {
        let mut out = p.update(1.0, NO_ACCEL, &viewport, &mut rng);
        assert_eq!(out.len(), 1);
        p = out.remove(0);
    }
    assert!(approx(p.age, 10_000.0));
}

#[test]
fn test_colour_fade() {
    let mut rng = SequenceRandom::constant(0.0);
    let mut p = Particle::spark(Vector::ZERO, Vector::ZERO, Colour::new(200, 100, 50), Some(4.0));

    assert_eq!(p.colour(&mut rng), Colour::new(200, 100, 50));

    p.age = 1.0;
    assert_eq!(p.colour(&mut rng), Colour::new(150, 75, 37));

    p.age = 4.0;
    assert_eq!(p.colour(&mut rng), Colour::BLACK);
}

#[test]
fn test_colour_fade_monotonic() {
    let mut rng = SequenceRandom::constant(0.0);
    let mut p = Particle::spark(Vector::ZERO, Vector::ZERO, Colour::new(255, 180, 33), Some(3.0));
    let mut previous = p.colour(&mut rng);
    for step in 1..=300 {
        p.age = step as f64 * 0.01;
        let current = p.colour(&mut rng);
        assert!(current.r <= previous.r && current.g <= previous.g && current.b <= previous.b);
        previous = current;
    }
}

#[test]
fn test_immortal_colour_unchanged() {
    let mut rng = SequenceRandom::constant(0.0);
    let mut p = Particle::spark(Vector::ZERO, Vector::ZERO, Colour::new(9, 8, 7), None);
    p.age = 1_000.0;
    assert_eq!(p.colour(&mut rng), Colour::new(9, 8, 7));
    assert_eq!(p.remaining_life(), None);
}

#[test]
fn test_zero_lifespan_colour_is_black() {
    let mut rng = SequenceRandom::constant(0.0);
    let p = Particle::spark(Vector::ZERO, Vector::ZERO, Colour::WHITE, Some(0.0));
    assert_eq!(p.colour(&mut rng), Colour::BLACK);
}

// ---- Flicker ----

#[test]
fn test_flicker_gold_range() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..1_000 {
        let c = flicker_gold(&mut rng);
        assert!((200..=255).contains(&c.r), "r out of range: {:?}", c);
        assert!((167..=250).contains(&c.g), "g out of range: {:?}", c);
        assert!((56..=83).contains(&c.b), "b out of range: {:?}", c);
    }
}

#[test]
fn test_flicker_recomputed_each_read() {
    let mut rng = SequenceRandom::new([0.0, 0.999]);
    let fw = Particle::firework(Vector::ZERO, Vector::ZERO, Colour::BLACK, 1.0);
    let first = fw.colour(&mut rng);
    let second = fw.colour(&mut rng);
    assert_eq!(first, Colour::new(200, 167, 56));
    assert_ne!(first, second, "Flicker should not be cached between reads");
    assert_eq!(rng.draws(), 2);
}

#[test]
fn test_firework_ignores_base_colour() {
    let mut rng = SequenceRandom::constant(0.25);
    let fw = Particle::super_firework(Vector::ZERO, Vector::ZERO, Colour::new(1, 2, 3), 1.0);
    assert_eq!(
        fw.colour(&mut rng),
        flicker_gold(&mut SequenceRandom::constant(0.25))
    );
    assert_eq!(fw.base_colour, Colour::new(1, 2, 3));
}

// ---- Trail sparks ----

#[test]
fn test_trail_spark_emitted_behind() {
    let mut rng = SequenceRandom::constant(0.5);
    let fw = Particle::firework(Vector::new(0.0, 0.1), Vector::new(0.0, 0.5), Colour::WHITE, 3.0);

    let out = fw.update(0.01, GRAVITY, &big_viewport(), &mut rng);
    assert_eq!(out.len(), 2, "Surviving firework plus one spark");

    let (firework, spark) = (&out[0], &out[1]);
    assert_eq!(firework.entity_kind(), EntityKind::Firework);
    assert_eq!(firework.kind.last_spark(), Some(0.0), "Timer resets on emission");

    assert_eq!(spark.entity_kind(), EntityKind::Spark);
    assert_eq!(spark.position, firework.position);
    assert!(approx(spark.velocity.x, 0.0));
    assert!(approx(spark.velocity.y, -SPARK_SPEED));
    assert_eq!(spark.lifespan, Some(1.0));
    assert_eq!(
        spark.base_colour,
        flicker_gold(&mut SequenceRandom::constant(0.5))
    );
}

#[test]
fn test_super_firework_trail_spark() {
    let mut rng = SequenceRandom::constant(0.5);
    let mut sfw = Particle::super_firework(
        Vector::new(0.0, 0.1),
        Vector::new(0.0, 0.5),
        Colour::new(200, 40, 90),
        3.0,
    );
    sfw.kind = ParticleKind::SuperFirework { last_spark: 1.0 };

    let out = sfw.update(0.01, NO_ACCEL, &big_viewport(), &mut rng);
    assert_eq!(out.len(), 2, "Surviving super firework plus one spark");

    let (carrier, spark) = (&out[0], &out[1]);
    assert_eq!(carrier.entity_kind(), EntityKind::SuperFirework);
    assert_eq!(carrier.kind.last_spark(), Some(0.0), "Timer resets on emission");

    assert_eq!(spark.entity_kind(), EntityKind::Spark);
    assert_eq!(spark.position, carrier.position);
    assert!(approx(spark.velocity.x, 0.0));
    assert!(approx(spark.velocity.y, -SPARK_SPEED));
    assert_eq!(
        spark.base_colour,
        flicker_gold(&mut SequenceRandom::constant(0.5))
    );
}

#[test]
fn test_trail_spark_cadence() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let viewport = big_viewport();
    let dt = 0.001;
    let mut fw = Particle::firework(Vector::new(0.0, 0.1), Vector::new(0.0, 5.0), Colour::WHITE, 1.0);

    let mut emitted_at = Vec::new();
    let mut now = 0.0;
    for _ in 0..900 {
        now += dt;
        let mut out = fw.update(dt, NO_ACCEL, &viewport, &mut rng);
        assert_eq!(out[0].entity_kind(), EntityKind::Firework);
        if out.len() == 2 {
            emitted_at.push(now);
        }
        fw = out.remove(0);
    }

    let interval = trail::spark_interval(Vector::new(0.0, 5.0));
    assert!(emitted_at.len() > 10, "Expected a steady trail, got {}", emitted_at.len());
    for pair in emitted_at.windows(2) {
        assert!(
            pair[1] - pair[0] >= interval - 1e-9,
            "Sparks {:?} closer than {}",
            pair,
            interval
        );
    }
}

#[test]
fn test_no_spark_before_interval() {
    let mut rng = SequenceRandom::constant(0.5);
    let mut fw = Particle::firework(Vector::new(0.0, 0.1), Vector::new(0.0, 100.0), Colour::WHITE, 3.0);
    // Interval at speed 100 is 0.125s.
    fw.kind = ParticleKind::Firework { last_spark: 0.0 };
    let out = fw.update(0.1, NO_ACCEL, &big_viewport(), &mut rng);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].kind.last_spark(), Some(0.1));
}

#[test]
fn test_zero_velocity_skips_spark() {
    let mut rng = SequenceRandom::constant(0.5);
    let mut fw = Particle::firework(Vector::new(0.0, 0.5), Vector::ZERO, Colour::WHITE, 3.0);
    fw.kind = ParticleKind::Firework { last_spark: 1.0 };
    assert!(trail::emit(&mut fw, &mut rng).is_none());
    assert_eq!(fw.kind.last_spark(), Some(1.0), "Timer untouched when no spark");
}

#[test]
fn test_sparks_never_emit_trails() {
    let mut rng = SequenceRandom::constant(0.5);
    let mut spark = hovering_spark(Some(1.0));
    assert!(trail::emit(&mut spark, &mut rng).is_none());
}

// ---- Detonation ----

#[test]
fn test_firework_detonation_burst() {
    let viewport = big_viewport();
    for seed in 0..50 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let fw = Particle::firework(Vector::new(0.2, 0.6), Vector::new(0.01, 0.2), Colour::WHITE, 0.0);
        let out = fw.update(0.016, GRAVITY, &viewport, &mut rng);

        assert!(
            (25..=100).contains(&out.len()),
            "Burst size {} out of range",
            out.len()
        );
        let colour = out[0].base_colour;
        for p in &out {
            assert_eq!(p.entity_kind(), EntityKind::Spark);
            assert_eq!(p.base_colour, colour, "Burst shares one colour");
            let lifespan = p.lifespan.expect("Burst particles are mortal");
            assert!((2.0..12.0).contains(&lifespan));
            assert_eq!(p.age, 0.0);
        }
    }
}

#[test]
fn test_firework_detonation_exact_draws() {
    let mut rng = SequenceRandom::constant(0.0);
    let parent = Particle::firework(Vector::new(0.1, 0.4), Vector::new(0.0, 0.1), Colour::WHITE, 1.0);
    let mut out = Vec::new();
    detonation::detonate(&parent, &mut rng, &mut out);

    assert_eq!(out.len(), 25);
    let kick = 0.05 / 2f64.sqrt();
    for p in &out {
        assert_eq!(p.base_colour, Colour::BLACK);
        assert_eq!(p.position, parent.position);
        assert!(approx(p.velocity.x, -kick));
        assert!(approx(p.velocity.y, 0.1 - kick));
        assert_eq!(p.lifespan, Some(2.0));
    }
}

#[test]
fn test_firework_detonation_upper_bound() {
    let mut rng = SequenceRandom::constant(0.999);
    let parent = Particle::firework(Vector::ZERO, Vector::ZERO, Colour::WHITE, 1.0);
    let mut out = Vec::new();
    detonation::detonate(&parent, &mut rng, &mut out);
    assert_eq!(out.len(), 100);
    assert_eq!(out[0].base_colour, Colour::WHITE);
}

#[test]
fn test_zero_lifespan_firework_yields_only_sparks() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let fw = Particle::firework(Vector::new(0.0, 0.5), Vector::new(0.0, 0.3), Colour::WHITE, 0.0);
    let out = fw.update(0.001, GRAVITY, &big_viewport(), &mut rng);
    assert!(!out.is_empty());
    assert!(out.iter().all(|p| p.entity_kind() == EntityKind::Spark));
}

#[test]
fn test_firework_detonates_when_leaving_screen() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let fw = Particle::firework(Vector::new(0.0, 0.001), Vector::new(0.0, -1.0), Colour::WHITE, 10.0);
    let out = fw.update(0.1, NO_ACCEL, &big_viewport(), &mut rng);
    assert!(out.len() >= 25, "Off-screen firework still bursts");
    assert!(out.iter().all(|p| p.position.y < 0.0));
}

#[test]
fn test_super_firework_detonation() {
    let viewport = big_viewport();
    for seed in 0..50 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let sfw = Particle::super_firework(Vector::new(0.0, 0.6), Vector::new(0.0, 0.1), Colour::WHITE, 0.0);
        let out = sfw.update(0.016, GRAVITY, &viewport, &mut rng);

        assert!((5..=9).contains(&out.len()), "Cascade size {} out of range", out.len());
        let colour = out[0].base_colour;
        for child in &out {
            assert_eq!(child.entity_kind(), EntityKind::Firework);
            assert_eq!(child.kind.last_spark(), Some(0.0));
            assert_eq!(child.base_colour, colour);
            assert!(colour.r >= 100 && colour.g >= 100 && colour.b >= 100);
            let lifespan = child.lifespan.expect("Cascade fireworks are mortal");
            assert!((1.0..4.0).contains(&lifespan));
        }
    }
}

#[test]
fn test_super_firework_count_bounds() {
    let parent = Particle::super_firework(Vector::ZERO, Vector::ZERO, Colour::WHITE, 1.0);

    let mut out = Vec::new();
    detonation::detonate(&parent, &mut SequenceRandom::constant(0.0), &mut out);
    assert_eq!(out.len(), 5);
    assert_eq!(out[0].base_colour, Colour::new(100, 100, 100));

    out.clear();
    detonation::detonate(&parent, &mut SequenceRandom::constant(0.999), &mut out);
    assert_eq!(out.len(), 9, "Upper bound is exclusive");
}

#[test]
fn test_cascade_children_detonate_into_sparks() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let viewport = big_viewport();
    let sfw = Particle::super_firework(Vector::new(0.0, 0.6), Vector::new(0.0, 0.1), Colour::WHITE, 0.0);
    let children = sfw.update(0.016, NO_ACCEL, &viewport, &mut rng);

    let mut fireworks = children;
    // Run past the longest cascade lifespan.
    for _ in 0..500 {
        fireworks = systems::step(fireworks, 0.01, NO_ACCEL, &viewport, &mut rng);
    }
    assert!(!fireworks.is_empty());
    assert!(
        fireworks.iter().all(|p| p.entity_kind() == EntityKind::Spark),
        "Every cascade firework should have burst by now"
    );
}

#[test]
fn test_burst_offset_magnitude() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    for _ in 0..1_000 {
        let len = detonation::burst_offset(&mut rng).length();
        assert!(len >= 0.05 - 1e-12 && len < 0.20 + 1e-12, "Offset length {len}");
    }
}

#[test]
fn test_burst_offset_degenerate_sample() {
    // Every sample lands on the origin of the unit square.
    let mut rng = SequenceRandom::constant(0.5);
    let offset = detonation::burst_offset(&mut rng);
    assert!(approx(offset.x, 0.0));
    assert!(approx(offset.length(), 0.05 + 0.5 * 0.15));
}

#[test]
fn test_spark_death_has_no_burst() {
    let mut rng = SequenceRandom::constant(0.0);
    let out = hovering_spark(Some(0.0)).update(0.1, NO_ACCEL, &big_viewport(), &mut rng);
    assert!(out.is_empty());
}

// ---- Step ----

#[test]
fn test_step_flattens_results() {
    let mut rng = SequenceRandom::constant(0.0);
    let viewport = big_viewport();
    let particles = vec![
        hovering_spark(Some(10.0)),
        hovering_spark(Some(0.05)),
        Particle::firework(Vector::new(0.0, 0.5), Vector::new(0.0, 0.2), Colour::WHITE, 0.0),
        hovering_spark(None),
    ];
    let next = systems::step(particles, 0.1, NO_ACCEL, &viewport, &mut rng);
    // 1 survivor + nothing + 25-particle burst + 1 survivor
    assert_eq!(next.len(), 27);
    assert_eq!(next[0].lifespan, Some(10.0));
    assert_eq!(next[26].lifespan, None);
}

#[test]
fn test_step_empty() {
    let mut rng = SequenceRandom::constant(0.0);
    assert!(systems::step(Vec::new(), 0.1, GRAVITY, &big_viewport(), &mut rng).is_empty());
}

// ---- Launch policy ----

#[test]
fn test_random_launch_ranges() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let mut fireworks = 0;
    let mut supers = 0;
    for _ in 0..3_000 {
        let p = launch::random_launch(&mut rng);
        assert!((-0.75..0.75).contains(&p.position.x));
        assert_eq!(p.position.y, 0.0);
        assert!((-0.05..0.05).contains(&p.velocity.x));
        assert!((0.25..0.50).contains(&p.velocity.y));
        assert_eq!(p.base_colour, Colour::WHITE);
        let lifespan = p.lifespan.expect("Launches are mortal");
        assert!([1.0, 2.0, 3.0, 4.0].contains(&lifespan), "lifespan {lifespan}");
        match p.entity_kind() {
            EntityKind::Firework => fireworks += 1,
            EntityKind::SuperFirework => supers += 1,
            EntityKind::Spark => panic!("Sparks are never launched"),
        }
    }
    let ratio = fireworks as f64 / supers as f64;
    assert!((1.7..2.3).contains(&ratio), "Expected ~2:1 weighting, got {ratio}");
}

#[test]
fn test_initial_population_size() {
    for seed in 0..100 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let population = launch::initial_population(&mut rng);
        assert!((5..20).contains(&population.len()));
    }
}

#[test]
fn test_maybe_launch_probability() {
    let mut particles = Vec::new();
    assert!(!launch::maybe_launch(&mut SequenceRandom::constant(0.1), 0.1, &mut particles));
    assert!(particles.is_empty());
    assert!(launch::maybe_launch(&mut SequenceRandom::constant(0.05), 0.1, &mut particles));
    assert_eq!(particles.len(), 1);

    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let launches = (0..10_000)
        .filter(|_| launch::maybe_launch(&mut rng, LAUNCH_PROBABILITY, &mut particles))
        .count();
    assert!((800..1200).contains(&launches), "Got {launches} launches");
}

// ---- Render ----

#[test]
fn test_render_batch_layout() {
    let mut rng = SequenceRandom::constant(0.0);
    let viewport = Viewport::new(800, 600);
    let particles = vec![
        Particle::spark(Vector::new(0.0, 0.5), Vector::ZERO, Colour::new(10, 20, 30), None),
        Particle::firework(Vector::new(0.5, 0.25), Vector::ZERO, Colour::WHITE, 1.0),
    ];
    let batch = render::build_batch(&particles, &viewport, &mut rng);

    assert_eq!(batch.vertices.len(), 12);
    assert_eq!(batch.colours.len(), 18);
    assert_eq!(batch.vertex_count(), 6);
    assert_eq!(&batch.colours[..9], &[10, 20, 30, 10, 20, 30, 10, 20, 30]);
    assert_eq!(&batch.colours[9..12], &[200, 167, 56]);

    let apex = Vector::new(0.0, 0.5 + TRIANGLE_SIZE).screen_space(&viewport);
    assert_eq!(batch.vertices[0], apex.x as f32);
    assert_eq!(batch.vertices[1], apex.y as f32);
}

#[test]
fn test_render_views() {
    let mut rng = SequenceRandom::constant(0.0);
    let particles = vec![
        Particle::super_firework(Vector::new(0.1, 0.2), Vector::ZERO, Colour::WHITE, 1.0),
        hovering_spark(None),
    ];
    let views = render::build_views(&particles, &mut rng);
    assert_eq!(views.len(), 2);
    assert_eq!(views[0].kind, EntityKind::SuperFirework);
    assert_eq!(views[0].position, Vector::new(0.1, 0.2));
    assert_eq!(views[1].colour, Colour::WHITE);
}

// ---- Random source ----

#[test]
fn test_sequence_random_integer_mapping() {
    let mut rng = SequenceRandom::new([0.0, 0.5, 0.999, 2.0, -1.0]);
    assert_eq!(rng.integer(0..=255), 0);
    assert_eq!(rng.integer(0..=255), 128);
    assert_eq!(rng.integer(0..=255), 255);
    assert_eq!(rng.integer(0..=255), 255, "Values above 1 are clamped");
    assert_eq!(rng.integer(0..=255), 0, "Values below 0 are clamped");
    assert_eq!(rng.draws(), 5);
    assert_eq!(rng.integer_below(3..3), 3);
}

#[test]
fn test_sequence_random_uniform() {
    let mut rng = SequenceRandom::new([0.25]);
    assert!(approx(rng.uniform(2.0..12.0), 4.5));
    assert!(rng.chance(0.3));
    assert!(!rng.chance(0.25));
}

#[test]
fn test_rng_uniform_and_chance() {
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    for _ in 0..1000 {
        let value = rng.uniform(BURST_SPEED);
        assert!(BURST_SPEED.contains(&value), "uniform {value} out of range");
        assert!(!rng.chance(0.0));
        assert!(rng.chance(1.0));
    }
    assert_eq!(rng.uniform(3.0..3.0), 3.0, "Empty range yields its start");
    assert!(!rng.chance(f64::NAN));
    assert!(rng.chance(2.0), "Probability clamps to 1");
    assert!(!rng.chance(-1.0), "Probability clamps to 0");

    let hits = (0..10_000).filter(|_| rng.chance(0.25)).count();
    assert!((2_000..3_000).contains(&hits), "chance(0.25) hit {hits} times");
}
