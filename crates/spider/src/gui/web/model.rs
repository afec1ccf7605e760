use crate::gui::web::ICON_SIZE;
use gdk_pixbuf::Pixbuf;
use silk::app::SelectedItem;
use silk::color::Rgb;
use silk::icon;
use silk::layout::Layout;

/// What the web canvas draws: the slot layout plus the decoded icons of the
/// filled slots, indexed like the slots.
pub struct WebState {
    pub layout: Layout,
    pub icons: Vec<Option<Pixbuf>>,
    pub accent: Rgb,
}

impl WebState {
    pub fn new(layout: Layout, accent: Rgb) -> Self {
        let icons = Self::load_icons(&layout);
        Self {
            layout,
            icons,
            accent,
        }
    }

    pub fn set_layout(&mut self, layout: Layout) {
        if self.layout != layout {
            self.icons = Self::load_icons(&layout);
            self.layout = layout;
        }
    }

    fn load_icons(layout: &Layout) -> Vec<Option<Pixbuf>> {
        layout
            .slots()
            .iter()
            .map(|slot| slot.item().and_then(Self::load_icon))
            .collect()
    }

    fn load_icon(item: &SelectedItem) -> Option<Pixbuf> {
        let path = icon::find_icon_path(&item.icon)?;
        match Pixbuf::from_file_at_scale(&path, ICON_SIZE, ICON_SIZE, true) {
            Ok(pixbuf) => Some(pixbuf),
            Err(e) => {
                log::warn!("Failed to load icon {}: {}", path.display(), e);
                None
            }
        }
    }
}
