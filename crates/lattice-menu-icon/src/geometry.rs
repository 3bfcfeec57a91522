//! Bar geometry of the menu icon.
//!
//! The icon is drawn on a `size × size` canvas as three round-capped bars.
//! Closed, they are horizontal and evenly spaced: the three bars plus six
//! padding units (two above the top bar, one between each pair, two below the
//! bottom bar) exactly fill the canvas. Open, the outer bars become the two
//! diagonals of an X and the middle bar collapses to a point and fades out.
//!
//! Everything here is a pure function of the state and the size, and every
//! output is linear in the size.
//!
//! ```
//! use lattice_menu_icon::geometry::resolve;
//!
//! let closed = resolve(false, 192.0);
//! assert_eq!(closed.top().start_y, 56.0);
//! assert_eq!(closed.top().thickness, 16.0);
//!
//! let open = resolve(true, 192.0);
//! assert_eq!(open.middle().opacity, 0.0);
//! ```

use lattice_menu_icon_core::MenuState;
use lattice_menu_icon_render::Point;

/// Size-derived constants that do not change between states.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarMetrics {
    /// Canvas side length in pixels.
    pub size: f32,
    /// Stroke width of every bar.
    pub thickness: f32,
    pub half_thickness: f32,
    /// One padding unit.
    pub spacing: f32,
    /// Distance from the canvas edge to the ends of a closed bar.
    pub horizontal_spacing: f32,
    /// Vertical centre of the top bar.
    pub y_top: f32,
    /// Vertical centre of the middle bar.
    pub y_middle: f32,
    /// Vertical centre of the bottom bar.
    pub y_bottom: f32,
}

impl BarMetrics {
    /// Derive the metrics for a canvas of `size` pixels.
    ///
    /// `size` is not validated; zero or negative sizes give a degenerate
    /// layout rather than an error.
    pub fn new(size: f32) -> Self {
        let thickness = size / 12.0;
        let half_thickness = thickness / 2.0;
        // (size - 3 * thickness) / 6
        let spacing = size / 6.0 - half_thickness;

        Self {
            size,
            thickness,
            half_thickness,
            spacing,
            horizontal_spacing: spacing + half_thickness,
            y_top: half_thickness + 2.0 * spacing,
            y_middle: thickness + half_thickness + 3.0 * spacing,
            y_bottom: 2.0 * thickness + half_thickness + 4.0 * spacing,
        }
    }

    /// Assemble the bars from the fixed metrics and a set of channel values.
    pub fn layout(&self, channels: &BarChannels) -> BarLayout {
        let top = BarSpec {
            start_x: channels.outer_start_x,
            start_y: self.y_top,
            end_x: channels.outer_end_x,
            end_y: channels.top_end_y,
            thickness: self.thickness,
            opacity: 1.0,
        };
        let middle = BarSpec {
            start_x: channels.middle_start_x,
            start_y: self.y_middle,
            end_x: channels.middle_end_x,
            end_y: self.y_middle,
            thickness: self.thickness,
            opacity: channels.middle_opacity,
        };
        let bottom = BarSpec {
            start_x: channels.outer_start_x,
            start_y: self.y_bottom,
            end_x: channels.outer_end_x,
            end_y: channels.bottom_end_y,
            thickness: self.thickness,
            opacity: 1.0,
        };
        BarLayout {
            bars: [top, middle, bottom],
        }
    }
}

/// A scalar of the layout that differs between the closed and open states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Start x of the top and bottom bars.
    OuterStartX,
    /// End x of the top and bottom bars.
    OuterEndX,
    /// Start x of the middle bar.
    MiddleStartX,
    /// End x of the middle bar.
    MiddleEndX,
    /// End y of the top bar.
    TopEndY,
    /// End y of the bottom bar.
    BottomEndY,
    /// Opacity of the middle bar.
    MiddleOpacity,
}

impl Channel {
    /// Number of channels.
    pub const COUNT: usize = 7;

    /// Every channel, in index order.
    pub const ALL: [Channel; Channel::COUNT] = [
        Channel::OuterStartX,
        Channel::OuterEndX,
        Channel::MiddleStartX,
        Channel::MiddleEndX,
        Channel::TopEndY,
        Channel::BottomEndY,
        Channel::MiddleOpacity,
    ];

    /// Position of this channel in [`Channel::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Human-readable label, used in logs.
    pub fn label(self) -> &'static str {
        match self {
            Channel::OuterStartX => "outer bars start x",
            Channel::OuterEndX => "outer bars end x",
            Channel::MiddleStartX => "middle bar start x",
            Channel::MiddleEndX => "middle bar end x",
            Channel::TopEndY => "top bar end y",
            Channel::BottomEndY => "bottom bar end y",
            Channel::MiddleOpacity => "middle bar opacity",
        }
    }
}

/// Values of every [`Channel`] at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarChannels {
    pub outer_start_x: f32,
    pub outer_end_x: f32,
    pub middle_start_x: f32,
    pub middle_end_x: f32,
    pub top_end_y: f32,
    pub bottom_end_y: f32,
    pub middle_opacity: f32,
}

impl BarChannels {
    /// Channel values at rest in `state`.
    pub fn target(metrics: &BarMetrics, state: MenuState) -> Self {
        let size = metrics.size;
        match state {
            MenuState::Closed => Self {
                outer_start_x: metrics.horizontal_spacing,
                outer_end_x: size - metrics.horizontal_spacing,
                middle_start_x: metrics.horizontal_spacing,
                middle_end_x: size - metrics.horizontal_spacing,
                top_end_y: metrics.y_top,
                bottom_end_y: metrics.y_bottom,
                middle_opacity: 1.0,
            },
            // y_top doubles as the horizontal inset so the X is square.
            MenuState::Open => Self {
                outer_start_x: metrics.y_top,
                outer_end_x: size - metrics.y_top,
                middle_start_x: size / 2.0,
                middle_end_x: size / 2.0,
                top_end_y: metrics.y_bottom,
                bottom_end_y: metrics.y_top,
                middle_opacity: 0.0,
            },
        }
    }

    /// Build from a per-channel function.
    pub fn from_fn(mut f: impl FnMut(Channel) -> f32) -> Self {
        Self {
            outer_start_x: f(Channel::OuterStartX),
            outer_end_x: f(Channel::OuterEndX),
            middle_start_x: f(Channel::MiddleStartX),
            middle_end_x: f(Channel::MiddleEndX),
            top_end_y: f(Channel::TopEndY),
            bottom_end_y: f(Channel::BottomEndY),
            middle_opacity: f(Channel::MiddleOpacity),
        }
    }

    /// The value of one channel.
    pub fn get(&self, channel: Channel) -> f32 {
        match channel {
            Channel::OuterStartX => self.outer_start_x,
            Channel::OuterEndX => self.outer_end_x,
            Channel::MiddleStartX => self.middle_start_x,
            Channel::MiddleEndX => self.middle_end_x,
            Channel::TopEndY => self.top_end_y,
            Channel::BottomEndY => self.bottom_end_y,
            Channel::MiddleOpacity => self.middle_opacity,
        }
    }
}

/// One bar: a line segment with a stroke width and an opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarSpec {
    pub start_x: f32,
    pub start_y: f32,
    pub end_x: f32,
    pub end_y: f32,
    pub thickness: f32,
    pub opacity: f32,
}

impl BarSpec {
    /// Start point of the segment.
    #[inline]
    pub fn start(&self) -> Point {
        Point::new(self.start_x, self.start_y)
    }

    /// End point of the segment.
    #[inline]
    pub fn end(&self) -> Point {
        Point::new(self.end_x, self.end_y)
    }

    /// Length of the segment, excluding caps.
    pub fn length(&self) -> f32 {
        (self.end_x - self.start_x).hypot(self.end_y - self.start_y)
    }

    /// Whether drawing this bar would produce any pixels.
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0 && self.thickness > 0.0
    }
}

/// The three bars of the icon, ordered top, middle, bottom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarLayout {
    bars: [BarSpec; 3],
}

impl BarLayout {
    /// The top bar (index 0).
    #[inline]
    pub fn top(&self) -> &BarSpec {
        &self.bars[0]
    }

    /// The middle bar (index 1).
    #[inline]
    pub fn middle(&self) -> &BarSpec {
        &self.bars[1]
    }

    /// The bottom bar (index 2).
    #[inline]
    pub fn bottom(&self) -> &BarSpec {
        &self.bars[2]
    }

    /// All bars in top-to-bottom order.
    #[inline]
    pub fn bars(&self) -> &[BarSpec; 3] {
        &self.bars
    }

    /// Iterate the bars in top-to-bottom order.
    pub fn iter(&self) -> impl Iterator<Item = &BarSpec> {
        self.bars.iter()
    }
}

impl From<BarLayout> for [BarSpec; 3] {
    fn from(layout: BarLayout) -> Self {
        layout.bars
    }
}

/// Resolve the resting layout of the icon for `state` on a `size` canvas.
pub fn resolve(state: impl Into<MenuState>, size: f32) -> BarLayout {
    let metrics = BarMetrics::new(size);
    metrics.layout(&BarChannels::target(&metrics, state.into()))
}

static_assertions::assert_impl_all!(BarLayout: Send, Sync, Copy);
static_assertions::assert_impl_all!(BarMetrics: Send, Sync, Copy);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_for_192() {
        let m = BarMetrics::new(192.0);
        assert_eq!(m.thickness, 16.0);
        assert_eq!(m.half_thickness, 8.0);
        assert_eq!(m.spacing, 24.0);
        assert_eq!(m.horizontal_spacing, 32.0);
        assert_eq!((m.y_top, m.y_middle, m.y_bottom), (56.0, 96.0, 136.0));
    }

    #[test]
    fn test_bars_and_padding_fill_canvas() {
        for size in [24.0_f32, 48.0, 96.0, 100.0, 192.0] {
            let m = BarMetrics::new(size);
            let filled = 3.0 * m.thickness + 6.0 * m.spacing;
            assert!((filled - size).abs() < 1e-4, "size {size}");
        }
    }

    #[test]
    fn test_closed_layout_192() {
        let layout = resolve(MenuState::Closed, 192.0);
        for (bar, y) in layout.iter().zip([56.0, 96.0, 136.0]) {
            assert_eq!((bar.start_x, bar.end_x), (32.0, 160.0));
            assert_eq!((bar.start_y, bar.end_y), (y, y));
            assert_eq!(bar.thickness, 16.0);
            assert_eq!(bar.opacity, 1.0);
        }
    }

    #[test]
    fn test_open_layout_192() {
        let layout = resolve(MenuState::Open, 192.0);
        assert_eq!(layout.top().start(), Point::new(56.0, 56.0));
        assert_eq!(layout.top().end(), Point::new(136.0, 136.0));
        assert_eq!(layout.bottom().start(), Point::new(56.0, 136.0));
        assert_eq!(layout.bottom().end(), Point::new(136.0, 56.0));
        assert_eq!(layout.middle().start(), Point::new(96.0, 96.0));
        assert_eq!(layout.middle().end(), Point::new(96.0, 96.0));
        assert_eq!(layout.middle().length(), 0.0);
        assert_eq!(layout.middle().opacity, 0.0);
        assert!(!layout.middle().is_visible());
        assert_eq!([layout.top().opacity, layout.bottom().opacity], [1.0, 1.0]);
    }

    #[test]
    fn test_bool_and_state_agree() {
        assert_eq!(resolve(true, 40.0), resolve(MenuState::Open, 40.0));
        assert_eq!(resolve(false, 40.0), resolve(MenuState::Closed, 40.0));
    }

    #[test]
    fn test_zero_size_is_degenerate_not_an_error() {
        let layout = resolve(MenuState::Closed, 0.0);
        for bar in layout.iter() {
            assert_eq!(bar.thickness, 0.0);
            assert_eq!(bar.length(), 0.0);
            assert!(!bar.is_visible());
        }
    }

    #[test]
    fn test_channel_indices_match_all() {
        for (i, channel) in Channel::ALL.into_iter().enumerate() {
            assert_eq!(channel.index(), i);
        }
        let channels = BarChannels::from_fn(|c| c.index() as f32);
        for channel in Channel::ALL {
            assert_eq!(channels.get(channel), channel.index() as f32);
        }
    }

    #[test]
    fn test_only_channels_differ_between_states() {
        let m = BarMetrics::new(64.0);
        let closed = BarChannels::target(&m, MenuState::Closed);
        let open = BarChannels::target(&m, MenuState::Open);
        for channel in Channel::ALL {
            assert_ne!(closed.get(channel), open.get(channel), "{}", channel.label());
        }
        let (a, b) = (m.layout(&closed), m.layout(&open));
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.start_y, y.start_y);
            assert_eq!(x.thickness, y.thickness);
        }
    }
}
