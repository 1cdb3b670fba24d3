//! Population integration test
//!
//! Смерть (HitLanded → EntityDied) и despawn врагов через полный FixedUpdate:
//! - ровно один EnemyRemoved на врага
//! - remaining_count в событии = остаток после удаления
//! - мёртвый враг выключен и стоит

use std::sync::{Arc, Mutex};

use bevy::prelude::*;
use enemy_ai_simulation::*;

// --- Helpers ---

type Log = Arc<Mutex<Vec<EnemyRemoved>>>;

fn spawn_enemy(app: &mut App, x: f32) -> Entity {
    let position = Vec3::new(x, 0.0, 0.0);
    app.world_mut()
        .spawn(enemy_bundle(
            position,
            EnemyConfig::default(),
            DetectionModule::default(),
        ))
        .id()
}

/// App с N активированными врагами + подписчик, пишущий EnemyRemoved в лог
fn setup(count: usize) -> (App, Vec<Entity>, Log) {
    let mut app = create_headless_app(42);
    let enemies = (0..count)
        .map(|i| spawn_enemy(&mut app, i as f32 * 10.0))
        .collect();

    let log: Log = Arc::default();
    let sink = log.clone();
    app.world_mut()
        .resource_mut::<EnemyPopulation>()
        .subscribe(move |event: &EnemyRemoved, _: &EnemyPopulation| {
            sink.lock().unwrap().push(*event);
        });

    run_fixed_tick(&mut app);
    (app, enemies, log)
}

fn kill(app: &mut App, attacker: Entity, target: Entity) {
    app.world_mut().send_event(HitLanded {
        attacker,
        target,
        damage: 1000,
    });
}

fn population(app: &App) -> &EnemyPopulation {
    app.world().resource::<EnemyPopulation>()
}

// --- Tests ---

#[test]
fn test_killing_three_of_three_reports_remaining() {
    let (mut app, enemies, log) = setup(3);
    let player = app.world_mut().spawn(Health::default()).id();
    assert_eq!(population(&app).remaining_count(), 3);

    kill(&mut app, player, enemies[0]);
    run_fixed_tick(&mut app);
    kill(&mut app, player, enemies[1]);
    run_fixed_tick(&mut app);
    kill(&mut app, player, enemies[2]);
    run_fixed_tick(&mut app);

    let remaining: Vec<usize> = log.lock().unwrap().iter().map(|e| e.remaining_count).collect();
    assert_eq!(remaining, vec![2, 1, 0]);
    assert_eq!(population(&app).remaining_count(), 0);
    assert_eq!(population(&app).total_count(), 3);
}

#[test]
fn test_dead_enemy_is_deactivated_and_idle() {
    let (mut app, enemies, log) = setup(1);
    let player = app.world_mut().spawn(Health::default()).id();

    kill(&mut app, player, enemies[0]);
    run_fixed_tick(&mut app);

    let brain = app.world().get::<EnemyBrain>(enemies[0]).unwrap();
    assert!(!brain.is_active());
    assert_eq!(
        app.world().get::<MovementCommand>(enemies[0]),
        Some(&MovementCommand::Idle)
    );
    assert_eq!(
        *log.lock().unwrap(),
        vec![EnemyRemoved {
            removed_enemy: enemies[0],
            remaining_count: 0
        }]
    );

    // Dead agent больше не тикает: destination не возвращается
    run_fixed_tick(&mut app);
    assert_eq!(
        app.world().get::<MovementCommand>(enemies[0]),
        Some(&MovementCommand::Idle)
    );
}

#[test]
fn test_overkill_reports_once() {
    let (mut app, enemies, log) = setup(2);
    let player = app.world_mut().spawn(Health::default()).id();

    kill(&mut app, player, enemies[0]);
    kill(&mut app, player, enemies[0]);
    run_fixed_tick(&mut app);
    kill(&mut app, player, enemies[0]);
    run_fixed_tick(&mut app);

    assert_eq!(log.lock().unwrap().len(), 1);
    assert_eq!(population(&app).remaining_count(), 1);
    assert!(population(&app).contains(enemies[1]));
}

#[test]
fn test_despawn_without_death_is_pruned() {
    let (mut app, enemies, log) = setup(2);

    app.world_mut().despawn(enemies[1]);
    run_fixed_tick(&mut app);

    assert_eq!(
        *log.lock().unwrap(),
        vec![EnemyRemoved {
            removed_enemy: enemies[1],
            remaining_count: 1
        }]
    );
    assert!(!population(&app).contains(enemies[1]));
}

#[test]
fn test_despawn_after_death_does_not_report_twice() {
    let (mut app, enemies, log) = setup(1);
    let player = app.world_mut().spawn(Health::default()).id();

    kill(&mut app, player, enemies[0]);
    run_fixed_tick(&mut app);
    app.world_mut().despawn(enemies[0]);
    run_fixed_tick(&mut app);

    assert_eq!(log.lock().unwrap().len(), 1);
    assert_eq!(population(&app).removed_count(), 1);
}

#[test]
fn test_non_enemy_death_is_ignored() {
    let (mut app, enemies, log) = setup(1);
    let player = app.world_mut().spawn(Health::default()).id();

    kill(&mut app, enemies[0], player);
    run_fixed_tick(&mut app);

    assert!(log.lock().unwrap().is_empty());
    assert_eq!(population(&app).remaining_count(), 1);
}

#[test]
fn test_listener_sees_enemy_still_registered() {
    let (mut app, enemies, _) = setup(2);
    let player = app.world_mut().spawn(Health::default()).id();

    let observed: Arc<Mutex<Vec<(bool, usize)>>> = Arc::default();
    let sink = observed.clone();
    app.world_mut()
        .resource_mut::<EnemyPopulation>()
        .subscribe(move |event: &EnemyRemoved, population: &EnemyPopulation| {
            sink.lock().unwrap().push((
                population.contains(event.removed_enemy),
                population.remaining_count(),
            ));
        });

    kill(&mut app, player, enemies[0]);
    run_fixed_tick(&mut app);

    assert_eq!(*observed.lock().unwrap(), vec![(true, 2)]);
    assert_eq!(population(&app).remaining_count(), 1);
}
