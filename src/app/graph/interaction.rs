use eframe::egui::{Event, Pos2, Rect, TouchId, TouchPhase};

use crate::input::InputEvent;

#[derive(Clone, Debug, PartialEq)]
pub(in crate::app) enum WindowInput {
    Pointer(Pos2),
    Touches(Vec<Pos2>),
    Gone,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::app) enum OutsideRect {
    Clamp,
    Leave,
}

pub(in crate::app) fn collect_window_inputs(
    events: &[Event],
    touches: &mut Vec<(TouchId, Pos2)>,
) -> Vec<WindowInput> {
    let mut inputs = Vec::new();
    for event in events {
        match event {
            Event::PointerMoved(pos) => inputs.push(WindowInput::Pointer(*pos)),
            Event::PointerGone => inputs.push(WindowInput::Gone),
            Event::Touch { id, phase, pos, .. } => {
                match phase {
                    TouchPhase::Start | TouchPhase::Move => {
                        if let Some(entry) = touches.iter_mut().find(|(touch, _)| touch == id) {
                            entry.1 = *pos;
                        } else {
                            touches.push((*id, *pos));
                        }
                    }
                    TouchPhase::End | TouchPhase::Cancel => {
                        touches.retain(|(touch, _)| touch != id);
                    }
                }
                inputs.push(WindowInput::Touches(
                    touches.iter().map(|(_, pos)| *pos).collect(),
                ));
            }
            _ => {}
        }
    }
    inputs
}

pub(in crate::app) fn surface_event(input: &WindowInput, rect: Rect, outside: OutsideRect) -> InputEvent {
    match input {
        WindowInput::Pointer(pos) => match to_local(*pos, rect, outside) {
            Some(local) => InputEvent::PointerMove(local),
            None => InputEvent::PointerLeave,
        },
        WindowInput::Touches(points) => match points.first() {
            Some(&first) => match to_local(first, rect, outside) {
                Some(local) => InputEvent::Touch(vec![local]),
                None => InputEvent::PointerLeave,
            },
            None => InputEvent::PointerLeave,
        },
        WindowInput::Gone => InputEvent::PointerLeave,
    }
}

fn to_local(pos: Pos2, rect: Rect, outside: OutsideRect) -> Option<Pos2> {
    let pos = match outside {
        OutsideRect::Clamp => pos.clamp(rect.min, rect.max),
        OutsideRect::Leave if rect.contains(pos) => pos,
        OutsideRect::Leave => return None,
    };
    Some(Pos2::ZERO + (pos - rect.min))
}
