//! Keyboard sampling into per-player intents.

use bevy::prelude::*;

use super::components::{Player, PlayerControls, PlayerHealth, PlayerIntent};
use crate::combat::{agent_label, Damageable};

/// Digital axis value from a pair of keys.
fn axis(keyboard: &ButtonInput<KeyCode>, negative: KeyCode, positive: KeyCode) -> f32 {
    let mut value = 0.0;
    if keyboard.pressed(positive) {
        value += 1.0;
    }
    if keyboard.pressed(negative) {
        value -= 1.0;
    }
    value
}

/// Read each living player's bindings into its `PlayerIntent`.
///
/// Dead players get an empty intent so nothing stale survives the respawn.
pub fn sample_player_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut player_query: Query<
        (Entity, Option<&Name>, &PlayerControls, &PlayerHealth, &mut PlayerIntent),
        With<Player>,
    >,
) {
    for (entity, name, controls, health, mut intent) in player_query.iter_mut() {
        if !health.is_alive() {
            *intent = PlayerIntent::default();
            continue;
        }

        intent.move_x = axis(&keyboard, controls.move_left, controls.move_right);
        intent.jump = keyboard.just_pressed(controls.jump_key);
        intent.melee = keyboard.just_pressed(controls.melee_key);

        if intent.melee {
            debug!("{}: melee attack key pressed", agent_label(entity, name));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        let mut app = App::new();
        app.init_resource::<ButtonInput<KeyCode>>()
            .add_systems(Update, sample_player_input);
        app
    }

    fn spawn_player(app: &mut App) -> Entity {
        app.world_mut()
            .spawn((Player, PlayerControls::default(), PlayerHealth::new(3, 3.0)))
            .id()
    }

    fn intent(app: &App, player: Entity) -> PlayerIntent {
        *app.world().get::<PlayerIntent>(player).unwrap()
    }

    #[test]
    fn reads_axis_and_just_pressed_keys() {
        let mut app = test_app();
        let player = spawn_player(&mut app);

        {
            let mut keyboard = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
            keyboard.press(KeyCode::ArrowLeft);
            keyboard.press(KeyCode::Slash);
            keyboard.press(KeyCode::ShiftRight);
        }
        app.update();

        assert_eq!(
            intent(&app, player),
            PlayerIntent {
                move_x: -1.0,
                jump: true,
                melee: true,
            }
        );

        // Held keys keep the axis but are no longer "just pressed".
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .clear();
        app.update();

        let held = intent(&app, player);
        assert_eq!(held.move_x, -1.0);
        assert!(!held.jump);
        assert!(!held.melee);
    }

    #[test]
    fn opposite_keys_cancel() {
        let mut app = test_app();
        let player = spawn_player(&mut app);

        {
            let mut keyboard = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
            keyboard.press(KeyCode::ArrowLeft);
            keyboard.press(KeyCode::ArrowRight);
        }
        app.update();

        assert_eq!(intent(&app, player).move_x, 0.0);
    }

    #[test]
    fn dead_player_has_no_intent() {
        let mut app = test_app();
        let player = spawn_player(&mut app);
        app.world_mut()
            .get_mut::<PlayerHealth>(player)
            .unwrap()
            .apply_damage(10.0);

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::ArrowRight);
        app.update();

        assert_eq!(intent(&app, player), PlayerIntent::default());
    }
}
