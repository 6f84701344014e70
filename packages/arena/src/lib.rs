//! # Arena — a tiny raycasting shooter
//!
//! The simulation behind the `/doom` page. It owns no rendering: each frame
//! the page calls [`Arena::update`] with the elapsed time and then draws the
//! [`WallSlice`]s from [`Arena::cast`] and the [`Sprite`]s from
//! [`Arena::sprites`] onto a canvas.
//!
//! The world is a 16×11 tile grid ([`MAP`], `'1'` = wall). Rays are marched
//! in fixed steps of [`RAY_STEP`] up to [`MAX_DEPTH`] tiles and corrected for
//! fish-eye distortion. Enemies walk straight at the player and drain health
//! on contact; firing kills the first living enemy within [`FIRE_RANGE`].
//!
//! Randomness only enters through the RNG passed to [`Arena::new`], so tests
//! drive it with a seeded `StdRng`.

use std::f64::consts::PI;

use rand::Rng;

pub const MAP: [&str; 11] = [
    "1111111111111111",
    "1000000000000001",
    "1011110111111101",
    "1010000100000101",
    "1010111101110101",
    "1000100001000001",
    "1110101111011101",
    "1000001000000001",
    "1011111110111101",
    "1000000000000001",
    "1111111111111111",
];

pub const FOV: f64 = PI / 3.0;
pub const MAX_DEPTH: f64 = 12.0;
pub const RAY_STEP: f64 = 0.02;
/// Longest frame step; slower frames are simulated as this.
pub const MAX_DT: f64 = 0.05;

pub const WALK_SPEED: f64 = 2.2;
pub const RUN_SPEED: f64 = 3.5;
pub const ROTATION_SPEED: f64 = 2.3;

pub const MAX_AMMO: u32 = 25;
pub const MAX_HEALTH: f64 = 100.0;
pub const FIRE_RANGE: f64 = 2.2;
pub const KILL_SCORE: u32 = 100;
pub const FLASH_SECS: f64 = 0.15;

pub const ENEMY_COUNT: usize = 6;
pub const ENEMY_SPEED: f64 = 0.6;
pub const ENEMY_REACH: f64 = 0.6;
/// Health lost per second per enemy in reach.
pub const ENEMY_DAMAGE: f64 = 6.0;

/// On-screen help, one line per control group.
pub const INSTRUCTIONS: [&str; 4] = [
    "W/S: mover, A/D: girar",
    "Shift: correr",
    "Espaço: disparar",
    "R: recarregar munição",
];

pub fn map_width() -> usize {
    MAP[0].len()
}

pub fn map_height() -> usize {
    MAP.len()
}

/// Anything outside the grid counts as wall.
pub fn is_wall(x: f64, y: f64) -> bool {
    if x < 0.0 || y < 0.0 || x >= map_width() as f64 || y >= map_height() as f64 {
        return true;
    }
    MAP[y.floor() as usize].as_bytes()[x.floor() as usize] == b'1'
}

/// A keyboard action, identified by `KeyboardEvent.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Forward,
    Backward,
    TurnLeft,
    TurnRight,
    Run,
    Fire,
    Reload,
}

impl Input {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "KeyW" => Some(Input::Forward),
            "KeyS" => Some(Input::Backward),
            "KeyA" => Some(Input::TurnLeft),
            "KeyD" => Some(Input::TurnRight),
            "ShiftLeft" | "ShiftRight" => Some(Input::Run),
            "Space" => Some(Input::Fire),
            "KeyR" => Some(Input::Reload),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Controls {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub run: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub x: f64,
    pub y: f64,
    pub angle: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Enemy {
    pub x: f64,
    pub y: f64,
    pub alive: bool,
}

/// HUD values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub health: u32,
    pub ammo: u32,
    pub score: u32,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            health: MAX_HEALTH as u32,
            ammo: MAX_AMMO,
            score: 0,
        }
    }
}

/// One vertical strip of wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallSlice {
    pub x: f64,
    pub top: f64,
    pub height: f64,
    /// Brightness, 0 (far) to 255 (near).
    pub shade: f64,
}

impl WallSlice {
    pub fn color(&self) -> String {
        format!(
            "rgb({:.0}, {:.0}, {:.0})",
            self.shade,
            self.shade * 0.5,
            self.shade * 0.3
        )
    }
}

/// An enemy drawn as a square billboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

#[derive(Debug, Clone)]
pub struct Arena {
    pub player: Player,
    pub controls: Controls,
    pub enemies: Vec<Enemy>,
    pub ammo: u32,
    pub health: f64,
    pub score: u32,
    /// Muzzle flash opacity, decays to 0.
    pub flash: f64,
}

impl Arena {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let enemies = (0..ENEMY_COUNT)
            .map(|_| Enemy {
                x: 3.0 + rng.gen::<f64>() * 9.0,
                y: 3.0 + rng.gen::<f64>() * 6.0,
                alive: true,
            })
            .collect();
        Self {
            player: Player {
                x: 2.5,
                y: 2.5,
                angle: PI / 4.0,
            },
            controls: Controls::default(),
            enemies,
            ammo: MAX_AMMO,
            health: MAX_HEALTH,
            score: 0,
            flash: 0.0,
        }
    }

    /// Apply a key transition. Fire and reload trigger on key down only.
    pub fn key(&mut self, input: Input, down: bool) {
        match input {
            Input::Forward => self.controls.forward = down,
            Input::Backward => self.controls.backward = down,
            Input::TurnLeft => self.controls.left = down,
            Input::TurnRight => self.controls.right = down,
            Input::Run => self.controls.run = down,
            Input::Fire if down => self.fire(),
            Input::Reload if down => self.reload(),
            Input::Fire | Input::Reload => {}
        }
    }

    pub fn fire(&mut self) {
        if self.ammo == 0 {
            return;
        }
        self.ammo -= 1;
        self.flash = FLASH_SECS;
        let (px, py) = (self.player.x, self.player.y);
        if let Some(hit) = self
            .enemies
            .iter_mut()
            .find(|e| e.alive && (e.x - px).hypot(e.y - py) < FIRE_RANGE)
        {
            hit.alive = false;
            self.score += KILL_SCORE;
            tracing::debug!("Enemy down, score {}", self.score);
        }
    }

    pub fn reload(&mut self) {
        self.ammo = MAX_AMMO;
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }

    pub fn stats(&self) -> Stats {
        Stats {
            health: self.health.round() as u32,
            ammo: self.ammo,
            score: self.score,
        }
    }

    /// Advance the simulation by `dt` seconds (clamped to [`MAX_DT`]).
    pub fn update(&mut self, dt: f64) {
        let dt = dt.clamp(0.0, MAX_DT);
        let speed = if self.controls.run { RUN_SPEED } else { WALK_SPEED };
        let step = speed * dt;
        let turn = ROTATION_SPEED * dt;

        if self.controls.left {
            self.player.angle -= turn;
        }
        if self.controls.right {
            self.player.angle += turn;
        }

        let dx = self.player.angle.cos() * step;
        let dy = self.player.angle.sin() * step;
        if self.controls.forward {
            self.slide(dx, dy);
        }
        if self.controls.backward {
            self.slide(-dx, -dy);
        }

        let (px, py) = (self.player.x, self.player.y);
        for enemy in self.enemies.iter_mut().filter(|e| e.alive) {
            let (dir_x, dir_y) = (px - enemy.x, py - enemy.y);
            let dist = dir_x.hypot(dir_y);
            if dist > ENEMY_REACH {
                enemy.x += dir_x / dist * dt * ENEMY_SPEED;
                enemy.y += dir_y / dist * dt * ENEMY_SPEED;
            } else {
                self.health = (self.health - dt * ENEMY_DAMAGE).max(0.0);
            }
        }

        self.flash = (self.flash - dt).max(0.0);
    }

    /// Move each axis independently so the player slides along walls.
    fn slide(&mut self, dx: f64, dy: f64) {
        let next_x = self.player.x + dx;
        if !is_wall(next_x, self.player.y) {
            self.player.x = next_x;
        }
        let next_y = self.player.y + dy;
        if !is_wall(self.player.x, next_y) {
            self.player.y = next_y;
        }
    }

    /// Distance along a ray until it enters a wall, capped at [`MAX_DEPTH`].
    pub fn ray_distance(&self, angle: f64) -> f64 {
        let (cos, sin) = (angle.cos(), angle.sin());
        let mut distance = 0.0;
        while distance < MAX_DEPTH {
            if is_wall(self.player.x + cos * distance, self.player.y + sin * distance) {
                break;
            }
            distance += RAY_STEP;
        }
        distance
    }

    /// Wall strips for a `width`×`height` viewport, one every `column_step` px.
    pub fn cast(&self, width: f64, height: f64, column_step: f64) -> Vec<WallSlice> {
        let mut slices = Vec::new();
        let mut column = 0.0;
        while column < width {
            let ray = self.player.angle - FOV / 2.0 + (column / width) * FOV;
            let corrected = self.ray_distance(ray) * (ray - self.player.angle).cos();
            let wall = if corrected > 0.0 {
                (height * 0.8 / corrected).min(height)
            } else {
                height
            };
            slices.push(WallSlice {
                x: column,
                top: (height - wall) / 2.0,
                height: wall,
                shade: (255.0 - corrected * 22.0).max(0.0),
            });
            column += column_step;
        }
        slices
    }

    /// Living enemies inside the field of view, projected to screen space.
    pub fn sprites(&self, width: f64, height: f64) -> Vec<Sprite> {
        self.enemies
            .iter()
            .filter(|e| e.alive)
            .filter_map(|enemy| {
                let (ex, ey) = (enemy.x - self.player.x, enemy.y - self.player.y);
                let to_enemy = ey.atan2(ex);
                let diff = (to_enemy - self.player.angle + PI).rem_euclid(2.0 * PI) - PI;
                if diff.abs() > FOV / 2.0 {
                    return None;
                }
                let distance = ex.hypot(ey);
                let size = (height * 0.7 / distance).min(height * 0.6);
                Some(Sprite {
                    x: (diff + FOV / 2.0) / FOV * width - size / 2.0,
                    y: height / 2.0 - size / 2.0,
                    size,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn arena() -> Arena {
        Arena::new(&mut StdRng::seed_from_u64(7))
    }

    #[test]
    fn test_spawn() {
        let arena = arena();
        assert_eq!(arena.enemies.len(), ENEMY_COUNT);
        for enemy in &arena.enemies {
            assert!((3.0..12.0).contains(&enemy.x));
            assert!((3.0..9.0).contains(&enemy.y));
        }
        assert_eq!(arena.stats(), Stats::default());
        assert_eq!((map_width(), map_height()), (16, 11));
    }

    #[test]
    fn test_walls() {
        assert!(is_wall(0.5, 0.5));
        assert!(!is_wall(1.5, 1.5));
        assert!(is_wall(-0.1, 3.0));
        assert!(is_wall(3.0, 11.0));
        assert!(is_wall(2.5, 2.5) == false);
    }

    #[test]
    fn test_input_codes() {
        assert_eq!(Input::from_code("KeyW"), Some(Input::Forward));
        assert_eq!(Input::from_code("ShiftRight"), Some(Input::Run));
        assert_eq!(Input::from_code("Space"), Some(Input::Fire));
        assert_eq!(Input::from_code("KeyQ"), None);
    }

    #[test]
    fn test_walking_into_wall_slides() {
        let mut arena = arena();
        arena.enemies.clear();
        arena.player = Player { x: 1.5, y: 1.5, angle: -PI / 2.0 };
        arena.key(Input::Forward, true);
        for _ in 0..100 {
            arena.update(0.05);
        }
        // Facing the top wall: y stops just below it.
        assert!(arena.player.y >= 1.0);
        assert!((arena.player.x - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_turning_and_running() {
        let mut arena = arena();
        arena.enemies.clear();
        let start = arena.player.angle;
        arena.key(Input::TurnRight, true);
        arena.update(0.05);
        assert!((arena.player.angle - start - ROTATION_SPEED * 0.05).abs() < 1e-9);

        arena.key(Input::TurnRight, false);
        arena.player = Player { x: 1.5, y: 1.5, angle: 0.0 };
        arena.key(Input::Forward, true);
        arena.key(Input::Run, true);
        arena.update(0.05);
        assert!((arena.player.x - (1.5 + RUN_SPEED * 0.05)).abs() < 1e-9);
    }

    #[test]
    fn test_dt_is_clamped() {
        let mut arena = arena();
        arena.enemies.clear();
        arena.player = Player { x: 1.5, y: 1.5, angle: 0.0 };
        arena.key(Input::Forward, true);
        arena.update(1.0);
        assert!((arena.player.x - (1.5 + WALK_SPEED * MAX_DT)).abs() < 1e-9);
    }

    #[test]
    fn test_fire_hits_nearby_enemy() {
        let mut arena = arena();
        arena.enemies = vec![
            Enemy { x: 9.0, y: 9.0, alive: true },
            Enemy { x: 3.5, y: 2.5, alive: true },
        ];
        arena.key(Input::Fire, true);

        assert_eq!(arena.ammo, MAX_AMMO - 1);
        assert_eq!(arena.flash, FLASH_SECS);
        assert!(arena.enemies[0].alive);
        assert!(!arena.enemies[1].alive);
        assert_eq!(arena.score, KILL_SCORE);

        arena.key(Input::Fire, false);
        assert_eq!(arena.ammo, MAX_AMMO - 1);
    }

    #[test]
    fn test_fire_needs_ammo_and_reload_refills() {
        let mut arena = arena();
        arena.ammo = 0;
        arena.fire();
        assert_eq!(arena.ammo, 0);
        assert_eq!(arena.flash, 0.0);

        arena.key(Input::Reload, true);
        assert_eq!(arena.ammo, MAX_AMMO);
    }

    #[test]
    fn test_enemies_chase_and_bite() {
        let mut arena = arena();
        arena.enemies = vec![
            Enemy { x: 2.7, y: 2.5, alive: true },
            Enemy { x: 6.5, y: 2.5, alive: true },
        ];
        arena.update(0.05);

        assert!((arena.health - (MAX_HEALTH - ENEMY_DAMAGE * 0.05)).abs() < 1e-9);
        assert!((arena.enemies[1].x - (6.5 - ENEMY_SPEED * 0.05)).abs() < 1e-9);
        assert_eq!(arena.enemies[0].x, 2.7);

        arena.health = 0.1;
        arena.update(0.05);
        assert_eq!(arena.health, 0.0);
        assert!(arena.is_dead());
    }

    #[test]
    fn test_flash_decays() {
        let mut arena = arena();
        arena.enemies.clear();
        arena.fire();
        arena.update(0.05);
        assert!((arena.flash - 0.1).abs() < 1e-9);
        arena.update(0.05);
        arena.update(0.05);
        assert_eq!(arena.flash, 0.0);
    }

    #[test]
    fn test_ray_distance() {
        let mut arena = arena();
        arena.player = Player { x: 1.5, y: 1.5, angle: PI / 2.0 };
        // Column 1 is open down to the wall row at y = 6.
        assert!((arena.ray_distance(PI / 2.0) - 4.5).abs() < RAY_STEP * 2.0);
        assert!((arena.ray_distance(-PI / 2.0) - 0.5).abs() < RAY_STEP * 2.0);
        // Row 1 is open for longer than the view distance.
        assert!(arena.ray_distance(0.0) >= MAX_DEPTH);
    }

    #[test]
    fn test_cast_columns() {
        let mut arena = arena();
        arena.player = Player { x: 1.5, y: 1.5, angle: PI / 2.0 };
        let slices = arena.cast(320.0, 200.0, 2.0);
        assert_eq!(slices.len(), 160);

        let center = slices[80];
        assert_eq!(center.x, 160.0);
        let expected = 200.0 * 0.8 / 4.5;
        assert!((center.height - expected).abs() < 1.0);
        assert!((center.top - (200.0 - center.height) / 2.0).abs() < 1e-9);
        assert!(center.shade > 150.0 && center.shade < 160.0);
        assert!(center.color().starts_with("rgb("));
    }

    #[test]
    fn test_sprites_in_view_only() {
        let mut arena = arena();
        arena.player = Player { x: 1.5, y: 1.5, angle: 0.0 };
        arena.enemies = vec![
            Enemy { x: 5.5, y: 1.5, alive: true },
            Enemy { x: -2.5, y: 1.5, alive: true },
            Enemy { x: 6.5, y: 1.5, alive: false },
        ];
        let sprites = arena.sprites(400.0, 200.0);
        assert_eq!(sprites.len(), 1);
        let sprite = sprites[0];
        assert!((sprite.size - 200.0 * 0.7 / 4.0).abs() < 1e-9);
        assert!((sprite.x + sprite.size / 2.0 - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_sprite_angle_wraps() {
        let mut arena = arena();
        arena.player = Player { x: 1.5, y: 1.5, angle: 4.0 * PI };
        arena.enemies = vec![Enemy { x: 5.5, y: 1.5, alive: true }];
        assert_eq!(arena.sprites(400.0, 200.0).len(), 1);
    }
}
