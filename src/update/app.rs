//! Application-level message handlers

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::DockModel;
use crate::view::geometry::Size;

use super::coordinator;

pub fn update_app<C>(model: &mut DockModel<C>, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Resize(width, height) => {
            model.layout.size = Size::new(width as f32, height as f32);
            Some(Cmd::Redraw)
        }

        AppMsg::Moved(origin) => {
            model.screen_origin = origin;
            None
        }

        AppMsg::Shutdown => {
            let closing = coordinator::close_all_floating(model);
            Cmd::batch(closing.into_iter().chain([Cmd::Quit]))
        }
    }
}
