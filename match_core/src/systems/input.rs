use hecs::World;

use crate::{InputSnapshot, Paddle, PaddleIntent};

/// Turn the per-tick input snapshot into paddle movement intents
pub fn apply_inputs(world: &mut World, input: &InputSnapshot) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        intent.dir = if paddle.player_id == 0 {
            input.paddle1_dir()
        } else {
            input.paddle2_dir()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_paddle;

    #[test]
    fn test_inputs_map_to_intents() {
        let mut world = World::new();
        let left = create_paddle(&mut world, 0, 210.0);
        let right = create_paddle(&mut world, 1, 210.0);

        let input = InputSnapshot {
            paddle1_up: true,
            paddle1_down: false,
            paddle2_up: false,
            paddle2_down: true,
        };
        apply_inputs(&mut world, &input);

        assert_eq!(world.get::<&PaddleIntent>(left).unwrap().dir, -1);
        assert_eq!(world.get::<&PaddleIntent>(right).unwrap().dir, 1);
    }

    #[test]
    fn test_released_keys_stop_paddles() {
        let mut world = World::new();
        let left = create_paddle(&mut world, 0, 210.0);

        let input = InputSnapshot {
            paddle1_down: true,
            ..Default::default()
        };
        apply_inputs(&mut world, &input);
        assert_eq!(world.get::<&PaddleIntent>(left).unwrap().dir, 1);

        apply_inputs(&mut world, &InputSnapshot::default());
        assert_eq!(world.get::<&PaddleIntent>(left).unwrap().dir, 0);
    }
}
