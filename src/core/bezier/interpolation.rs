//! De-Casteljau-Konstruktion (Grad 3) und Fortschreiben von t.

use super::BezierCurve;
use crate::core::geometry::lerp;

impl BezierCurve {
    /// Aktueller Kurvenparameter t ∈ [0, 1).
    pub fn t(&self) -> f32 {
        self.step as f32 / self.config.total_steps as f32
    }

    /// Aktueller Schrittindex (t = step / total_steps).
    pub fn step(&self) -> u32 {
        self.step
    }

    /// Schrittweite von t pro Frame.
    pub fn step_size(&self) -> f32 {
        1.0 / self.config.total_steps as f32
    }

    /// Setzt t auf einen Schrittindex (modulo total_steps), ohne Marker neu zu berechnen.
    pub fn seek_step(&mut self, step: u32) {
        self.step = step % self.config.total_steps;
    }

    /// Berechnet alle Marker neu aus den aktuellen Kontrollpunkten und t.
    ///
    /// Immer von Grund auf, da Kontrollpunkte seit dem letzten Aufruf verschoben sein können.
    pub fn recompute_markers(&mut self) {
        let [p0, p1, p2, p3] = self.control_positions();
        let t = self.t();

        let q = [lerp(p0, p1, t), lerp(p1, p2, t), lerp(p2, p3, t)];
        let r = [lerp(q[0], q[1], t), lerp(q[1], q[2], t)];
        let b = lerp(r[0], r[1], t);

        let positions = [q[0], q[1], q[2], r[0], r[1], b];
        for (marker, position) in self.markers.iter_mut().zip(positions) {
            marker.position = position;
        }
    }

    /// Erhöht t um einen Schritt. Ab t ≥ 1 harter Reset auf exakt 0.0.
    pub fn advance(&mut self) {
        self.step += 1;
        if self.step >= self.config.total_steps {
            self.step = 0;
        }
    }

    /// Ein Animationsschritt: Marker neu berechnen, danach t erhöhen (außer pausiert).
    pub fn interpolate(&mut self) {
        self.recompute_markers();
        if !self.paused {
            self.advance();
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Friert t ein. Marker folgen weiterhin den Kontrollpunkten.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Setzt die Animation von t fort.
    pub fn run(&mut self) {
        self.paused = false;
    }
}
