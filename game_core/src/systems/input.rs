use crate::resources::{InputEvent, InputQueue, SessionControl};
use crate::ship::Ship;

/// Drain queued input: intents go straight to the ship, session controls are
/// returned in arrival order for the controller to apply.
pub fn ingest_inputs(queue: &mut InputQueue, ship: &mut Ship) -> Vec<SessionControl> {
    let mut controls = Vec::new();

    for event in queue.drain() {
        match event {
            InputEvent::Press(intent) => ship.set_intent(intent, true),
            InputEvent::Release(intent) => ship.set_intent(intent, false),
            InputEvent::Control(control) => controls.push(control),
        }
    }

    controls
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, Intent};

    #[test]
    fn test_last_write_wins() {
        let mut queue = InputQueue::new();
        let mut ship = Ship::new(Ship::start_position(), &Config::new());

        queue.push(InputEvent::Press(Intent::Left));
        queue.push(InputEvent::Release(Intent::Left));
        queue.push(InputEvent::Press(Intent::Fire));

        let controls = ingest_inputs(&mut queue, &mut ship);

        assert!(controls.is_empty());
        assert!(!ship.intent().left, "release after press clears the flag");
        assert!(ship.intent().fire);
        assert!(queue.events.is_empty(), "queue drained");
    }

    #[test]
    fn test_controls_returned_in_order() {
        let mut queue = InputQueue::new();
        let mut ship = Ship::new(Ship::start_position(), &Config::new());

        queue.push(InputEvent::Control(SessionControl::Start));
        queue.push(InputEvent::Press(Intent::Up));
        queue.push(InputEvent::Control(SessionControl::TogglePause));

        let controls = ingest_inputs(&mut queue, &mut ship);

        assert_eq!(
            controls,
            vec![SessionControl::Start, SessionControl::TogglePause]
        );
        assert!(ship.intent().up);
    }
}
