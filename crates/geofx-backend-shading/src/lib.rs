//! geofx procedural shading and animation engine
//!
//! Pure, deterministic color computations for a 3D map dashboard: every
//! surface color is a function of a surface position, a UV coordinate, a
//! frame time and immutable effect parameters. Nothing here allocates per
//! evaluation or keeps hidden state; the only mutable state is the
//! [`AnimationClock`] owned by the caller.
//!
//! # Features
//!
//! - **Noise**: 2D simplex noise with terrain octave sums and a fine shading octave
//! - **Region masks**: soft rectangular geographic masks built from smooth gates
//! - **Terrain**: palette blending driven by noise and the plateau/desert masks
//! - **Animated effects**: side-wall scan line, bar pulse, ground ripple, gear ring
//! - **Materials**: descriptors binding a formula to parameters and render hints
//! - **Preview output**: CPU compositing into a buffer and deterministic PNG
//!
//! # Example
//!
//! ```
//! use geofx_backend_shading::{AnimatedEffectSet, MaterialFactory, ShadeInput};
//! use geofx_spec::{EffectType, GroundParams};
//!
//! let factory = MaterialFactory::new();
//! let ground = factory
//!     .build(EffectType::Ground, GroundParams::default().into())
//!     .unwrap();
//!
//! let mut effects = AnimatedEffectSet::new();
//! effects.tick(2.5);
//!
//! // Ring 0 has expanded to radius 0.5; a point just outside its front is lit.
//! let input = ShadeInput::new([0.0; 3], [1.005, 0.5]);
//! let color = factory.shade(&ground, &input, effects.frame());
//! assert!((color.a - 0.25).abs() < 1e-9);
//! ```

pub mod clock;
pub mod color;
pub mod effects;
pub mod mask;
pub mod material;
pub mod math;
pub mod noise;
pub mod png;
pub mod render;
pub mod terrain;

pub use clock::{AnimationClock, ClockUpdate, FrameTime};
pub use color::Color;
pub use effects::AnimatedEffectSet;
pub use mask::{mask, smooth_gate, Gate, RegionMask};
pub use material::{FogInput, MaterialError, MaterialFactory, ShadeInput};
pub use noise::{Noise2D, NoiseField, SimplexNoise};
pub use png::{PngConfig, PngError};
pub use render::{composite, render_layer, render_scene, RenderError, TextureBuffer};
pub use terrain::{Palette, TerrainColorizer};
