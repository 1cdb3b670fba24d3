//! Headless enemy AI сценарий
//!
//! 3 врага патрулируют, игрок появляется рядом с первым, тот его замечает,
//! догоняет и атакует. Потом игрок убивает двоих — популяция сообщает остаток.

use bevy::prelude::*;
use enemy_ai_simulation::ai::DetectionEvent;
use enemy_ai_simulation::{
    create_headless_app, enemy_bundle, run_fixed_tick, DetectionModule, EnemyBrain, EnemyConfig,
    EnemyPopulation, EnemyRemoved, HitLanded, PatrolRoute,
};

fn main() {
    let seed = 42;
    println!("Starting enemy AI headless simulation (seed: {})", seed);

    let mut app = create_headless_app(seed);

    let player = app
        .world_mut()
        .spawn(Transform::from_translation(Vec3::new(30.0, 0.0, 0.0)))
        .id();

    let enemies: Vec<Entity> = (0..3)
        .map(|i| {
            let origin = Vec3::new(i as f32 * 20.0, 0.0, 0.0);
            let route = PatrolRoute::new(vec![
                origin,
                origin + Vec3::new(0.0, 0.0, 10.0),
                origin + Vec3::new(5.0, 0.0, 10.0),
            ]);
            app.world_mut()
                .spawn((
                    enemy_bundle(origin, EnemyConfig::default(), DetectionModule::default()),
                    route,
                ))
                .id()
        })
        .collect();

    app.world_mut()
        .resource_mut::<EnemyPopulation>()
        .subscribe(|event: &EnemyRemoved, _: &EnemyPopulation| {
            println!(
                "Enemy {:?} down, {} remaining",
                event.removed_enemy, event.remaining_count
            );
        });

    for tick in 0..300 {
        // Игрок в поле зрения первого врага с 60 тика
        if tick == 60 {
            if let Some(mut detection) = app.world_mut().get_mut::<DetectionModule>(enemies[0]) {
                detection.known_target = Some(player);
                detection.is_seeing_target = true;
                detection.is_target_in_attack_range = true;
            }
            app.world_mut()
                .send_event(DetectionEvent::TargetAcquired { enemy: enemies[0] });
        }

        if tick == 200 || tick == 250 {
            let victim = enemies[if tick == 200 { 1 } else { 2 }];
            app.world_mut().send_event(HitLanded {
                attacker: player,
                target: victim,
                damage: 1000,
            });
        }

        run_fixed_tick(&mut app);

        if tick % 50 == 0 {
            let state = app
                .world()
                .get::<EnemyBrain>(enemies[0])
                .map(|brain| brain.state());
            println!("Tick {}: enemy[0] state = {:?}", tick, state);
        }
    }

    let population = app.world().resource::<EnemyPopulation>();
    println!(
        "Simulation complete! {} / {} enemies alive",
        population.remaining_count(),
        population.total_count()
    );
}
