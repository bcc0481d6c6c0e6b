//! Trigger dispatch.

use tracing::trace;

use crate::core::{GameState, ObjectId};
use crate::interpreter::{run_program, ChoiceStream, ExecStatus};
use crate::triggers::GameEvent;

/// Fire every triggered ability listening for `event`.
///
/// Listeners run in a stable order: ascending object id (creation
/// order), then declaration order within an object. The listener set is
/// snapshotted up front; an object destroyed by an earlier listener is
/// skipped when its turn comes, and triggers attached mid-dispatch do
/// not fire for this event.
///
/// Returns `Suspended` as soon as any listener's program suspends for
/// targeting; the remaining listeners re-run on resume.
pub fn dispatch(
    state: &mut GameState,
    event: &GameEvent,
    choices: &mut ChoiceStream,
) -> ExecStatus {
    let mut listeners: Vec<ObjectId> = Vec::new();
    for color in crate::core::Color::both() {
        for obj in state.players[color].objects_on_board.values() {
            if !obj.triggers.is_empty() {
                listeners.push(obj.id);
            }
        }
    }
    listeners.sort();

    for id in listeners {
        // Re-lookup: the object may have died or moved since the snapshot.
        let Some((controller, hex)) = state.find_object(id) else {
            continue;
        };
        let Some(obj) = state.players[controller].object_at(hex) else {
            continue;
        };

        let programs: Vec<_> = obj
            .triggers
            .iter()
            .filter(|binding| binding.matches(event, obj, controller))
            .map(|binding| binding.program.clone())
            .collect();

        for program in programs {
            trace!(object = %id, kind = ?event.kind, "firing trigger");
            if run_program(state, &program, controller, Some(id), choices)
                == ExecStatus::Suspended
            {
                return ExecStatus::Suspended;
            }
        }
    }

    ExecStatus::Complete
}
