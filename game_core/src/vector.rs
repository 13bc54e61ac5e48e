use glam::Vec2;

/// Magnitude setter for `Vec2` that keeps the current direction
pub trait SetLength {
    /// Rescale to `length`. A zero vector has no direction and is left alone.
    fn set_length(&mut self, length: f32);
}

impl SetLength for Vec2 {
    fn set_length(&mut self, length: f32) {
        let current = self.length();
        if current == 0.0 {
            return;
        }
        *self *= length / current;
    }
}
