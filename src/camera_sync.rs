use diorama_core::{CameraPose, Host, SceneRuntime};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Orbit-control pose that arrived while a frame held the runtime.
pub type PendingPose = Rc<Cell<Option<CameraPose>>>;

/// Hand an orbit-control pose to the runtime. Orbit controls fire from inside
/// the host's render, while the frame still holds the runtime, so the pose is
/// parked for the next frame instead. Returns whether it was applied now.
pub fn sync_or_queue<H: Host>(
    runtime: &RefCell<SceneRuntime<H>>,
    pending: &Cell<Option<CameraPose>>,
    pose: CameraPose,
) -> bool {
    match runtime.try_borrow_mut() {
        Ok(mut runtime) => {
            runtime.sync_camera(pose);
            true
        }
        Err(_) => {
            pending.set(Some(pose));
            false
        }
    }
}

/// Apply the latest parked pose, if any. Called at the top of a frame.
pub fn apply_pending<H: Host>(runtime: &mut SceneRuntime<H>, pending: &Cell<Option<CameraPose>>) {
    if let Some(pose) = pending.take() {
        runtime.sync_camera(pose);
    }
}
