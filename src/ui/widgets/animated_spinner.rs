// SPDX-License-Identifier: MPL-2.0
//! Canvas spinner whose rotation is derived from elapsed time.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::{PI, TAU};
use std::time::Duration;

/// One full turn per this duration.
const TURN: Duration = Duration::from_millis(900);

/// Ring with a rotating half-arc.
pub struct AnimatedSpinner {
    rotation: f32,
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    /// Spinner positioned as it should look `elapsed` after loading started.
    #[must_use]
    pub fn at(color: Color, elapsed: Duration) -> Self {
        Self {
            rotation: rotation_at(elapsed),
            color,
            size: sizing::ICON_XXL,
        }
    }

    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn into_element<'a, Message: 'a>(self) -> Element<'a, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

/// Rotation angle in radians, wrapped to one turn.
#[must_use]
pub fn rotation_at(elapsed: Duration) -> f32 {
    let turns = elapsed.as_secs_f32() / TURN.as_secs_f32();
    turns.fract() * TAU
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = frame.center();
        let radius = frame.width().min(frame.height()) / 2.0 - 4.0;

        frame.stroke(
            &Path::circle(center, radius),
            Stroke::default().with_width(4.0).with_color(Color {
                a: 0.2,
                ..self.color
            }),
        );

        let start_angle = self.rotation - PI / 2.0;
        let arc = Path::new(|builder| {
            builder.arc(canvas::path::Arc {
                center,
                radius,
                start_angle: iced::Radians(start_angle),
                end_angle: iced::Radians(start_angle + PI * 0.75),
            });
        });
        frame.stroke(
            &arc,
            Stroke::default()
                .with_width(4.0)
                .with_color(self.color)
                .with_line_cap(canvas::LineCap::Round),
        );

        // Leading dot so the direction reads at small sizes.
        let head = Point::new(
            center.x + radius * (start_angle + PI * 0.75).cos(),
            center.y + radius * (start_angle + PI * 0.75).sin(),
        );
        frame.fill(&Path::circle(head, 3.0), self.color);

        vec![frame.into_geometry()]
    }
}
