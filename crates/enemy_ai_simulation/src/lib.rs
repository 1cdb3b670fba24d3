//! Enemy AI Simulation Core
//!
//! ECS-симуляция на Bevy 0.16 (strategic layer) для FPS врагов:
//! - per-agent FSM Patrol → Follow → Attack (ai)
//! - учёт живых врагов + EnemyRemoved подписчикам (population)
//!
//! HYBRID ARCHITECTURE:
//! - ECS = решения (AI state, attack timing, population)
//! - Хост-движок = physics, rendering, navmesh, animation/audio playback

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod ai;
pub mod combat;
pub mod components;
pub mod error;
pub mod logger;
pub mod population;

// Re-export базовых типов для удобства
pub use ai::{AIPlugin, AIState, EnemyBrain, EnemyConfig, PatrolLoop, PatrolRoute};
pub use combat::{Attacker, CombatPlugin, DamageDealt, EntityDied, HitLanded};
pub use components::*;
pub use error::{EnemyConfigError, EnemySetupError, PopulationError};
pub use logger::{init_logger, log, log_error, log_info, log_warning};
pub use population::{EnemyPopulation, EnemyRemoved, PopulationListener, PopulationPlugin};

/// Фазы одного FixedUpdate tick (выполняются строго по порядку)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Cooldowns, попадания → Health
    Combat,
    /// Активация агентов, detection сигналы, реакция на урон
    Perception,
    /// on_tick каждого EnemyBrain
    Decision,
    /// Attack Provider, locomotion feedback
    Resolution,
    /// Смерть/despawn → EnemyPopulation
    Population,
}

fn configure_simulation_sets(app: &mut App) {
    app.configure_sets(
        FixedUpdate,
        (
            SimulationSet::Combat,
            SimulationSet::Perception,
            SimulationSet::Decision,
            SimulationSet::Resolution,
            SimulationSet::Population,
        )
            .chain(),
    );
}

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        configure_simulation_sets(app);

        app
            // Fixed timestep 60Hz для simulation tick
            .insert_resource(Time::<Fixed>::from_hz(60.0))
            .add_plugins((CombatPlugin, AIPlugin, PopulationPlugin));
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

impl Default for DeterministicRng {
    fn default() -> Self {
        Self::new(42)
    }
}

/// Создаёт minimal Bevy App для headless симуляции (со всеми plugins)
///
/// Время ручное: каждый `app.update()` сдвигает часы ровно на один fixed timestep.
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .add_plugins(SimulationPlugin);

    sync_time_strategy(&mut app);
    // Первый update только запускает часы Time<Real> (delta = 0, FixedUpdate не идёт)
    app.update();

    app
}

fn sync_time_strategy(app: &mut App) {
    let timestep = app.world().resource::<Time<Fixed>>().timestep();
    app.insert_resource(TimeUpdateStrategy::ManualDuration(timestep));
}

/// Прогоняет ровно один логический tick (FixedUpdate) через полный `app.update()`
///
/// Main schedule обслуживает Events (double buffer чистится после fixed tick)
/// и RemovedComponents, так что буферы событий не растут.
pub fn run_fixed_tick(app: &mut App) {
    sync_time_strategy(app);
    app.update();
}

/// Полный набор компонентов enemy (brain + провайдеры + config)
///
/// Output surfaces (MovementCommand, FacingCommand, EnemyAnimation) добавятся
/// через Required Components EnemyBrain.
pub fn enemy_bundle(position: Vec3, config: EnemyConfig, detection: DetectionModule) -> impl Bundle {
    (
        EnemyBrain::new(),
        config,
        detection,
        NavigationAgent::default(),
        Attacker::default(),
        Health::default(),
        MovementAudio::default(),
        Transform::from_translation(position),
    )
}
