//! Visual pattern families understood by the styling service.
//!
//! Each family maps its variants to wire tokens through an explicit,
//! exhaustive `match` so reordering or inserting a variant can never silently
//! shift another variant's token.

/// Body (data module) shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Square,
    Mosaic,
    Dot,
    Circle,
    CircleZebra,
    CircleZebraVertical,
    CircleZebraHorizontal,
    Circular,
    EdgeCut,
    EdgeCutSmooth,
    Japanese,
    Leaf,
    Pointed,
    PointedEdgeCut,
    PointedIn,
    PointedInSmooth,
    PointedSmooth,
    Round,
    RoundedIn,
    RoundedInSmooth,
    RoundedPointed,
    Star,
    Diamond,
}

impl Body {
    pub const ALL: [Body; 23] = [
        Body::Square,
        Body::Mosaic,
        Body::Dot,
        Body::Circle,
        Body::CircleZebra,
        Body::CircleZebraVertical,
        Body::CircleZebraHorizontal,
        Body::Circular,
        Body::EdgeCut,
        Body::EdgeCutSmooth,
        Body::Japanese,
        Body::Leaf,
        Body::Pointed,
        Body::PointedEdgeCut,
        Body::PointedIn,
        Body::PointedInSmooth,
        Body::PointedSmooth,
        Body::Round,
        Body::RoundedIn,
        Body::RoundedInSmooth,
        Body::RoundedPointed,
        Body::Star,
        Body::Diamond,
    ];

    /// Wire token for this body shape. `CircleZebra` has no token of its own
    /// on the service side and falls back to `"square"`.
    pub fn token(&self) -> &'static str {
        match self {
            Body::Square => "square",
            Body::Mosaic => "mosaic",
            Body::Dot => "dot",
            Body::Circle => "circle",
            Body::CircleZebra => "square",
            Body::CircleZebraVertical => "circle-zebra-vertical",
            Body::CircleZebraHorizontal => "circle-zebra-horizontal",
            Body::Circular => "circular",
            Body::EdgeCut => "edge-cut",
            Body::EdgeCutSmooth => "edge-cut-smooth",
            // the service spells it this way
            Body::Japanese => "japnese",
            Body::Leaf => "leaf",
            Body::Pointed => "pointed",
            Body::PointedEdgeCut => "pointed-edge-cut",
            Body::PointedIn => "pointed-in",
            Body::PointedInSmooth => "pointed-in-smooth",
            Body::PointedSmooth => "pointed-smooth",
            Body::Round => "round",
            Body::RoundedIn => "rounded-in",
            Body::RoundedInSmooth => "rounded-in-smooth",
            Body::RoundedPointed => "rounded-pointed",
            Body::Star => "star",
            Body::Diamond => "diamond",
        }
    }
}

/// Eye frame (finder pattern outline) shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Eye {
    Frame0,
    Frame1,
    Frame2,
    Frame3,
    Frame4,
    Frame5,
    Frame6,
    Frame7,
    Frame8,
    Frame9,
    Frame10,
    Frame11,
    Frame12,
    Frame13,
    Frame14,
    Frame15,
    Frame16,
}

impl Eye {
    pub const ALL: [Eye; 17] = [
        Eye::Frame0,
        Eye::Frame1,
        Eye::Frame2,
        Eye::Frame3,
        Eye::Frame4,
        Eye::Frame5,
        Eye::Frame6,
        Eye::Frame7,
        Eye::Frame8,
        Eye::Frame9,
        Eye::Frame10,
        Eye::Frame11,
        Eye::Frame12,
        Eye::Frame13,
        Eye::Frame14,
        Eye::Frame15,
        Eye::Frame16,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            Eye::Frame0 => "frame0",
            Eye::Frame1 => "frame1",
            Eye::Frame2 => "frame2",
            Eye::Frame3 => "frame3",
            Eye::Frame4 => "frame4",
            Eye::Frame5 => "frame5",
            Eye::Frame6 => "frame6",
            Eye::Frame7 => "frame7",
            Eye::Frame8 => "frame8",
            Eye::Frame9 => "frame9",
            Eye::Frame10 => "frame10",
            Eye::Frame11 => "frame11",
            Eye::Frame12 => "frame12",
            Eye::Frame13 => "frame13",
            Eye::Frame14 => "frame14",
            Eye::Frame15 => "frame15",
            Eye::Frame16 => "frame16",
        }
    }
}

/// Eye ball (finder pattern center) shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ball {
    Ball0,
    Ball1,
    Ball2,
    Ball3,
    Ball4,
    Ball5,
    Ball6,
    Ball7,
    Ball8,
    Ball9,
    Ball10,
    Ball11,
    Ball12,
    Ball13,
    Ball14,
    Ball15,
    Ball16,
    Ball17,
    Ball18,
}

impl Ball {
    pub const ALL: [Ball; 19] = [
        Ball::Ball0,
        Ball::Ball1,
        Ball::Ball2,
        Ball::Ball3,
        Ball::Ball4,
        Ball::Ball5,
        Ball::Ball6,
        Ball::Ball7,
        Ball::Ball8,
        Ball::Ball9,
        Ball::Ball10,
        Ball::Ball11,
        Ball::Ball12,
        Ball::Ball13,
        Ball::Ball14,
        Ball::Ball15,
        Ball::Ball16,
        Ball::Ball17,
        Ball::Ball18,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            Ball::Ball0 => "ball0",
            Ball::Ball1 => "ball1",
            Ball::Ball2 => "ball2",
            Ball::Ball3 => "ball3",
            Ball::Ball4 => "ball4",
            Ball::Ball5 => "ball5",
            Ball::Ball6 => "ball6",
            Ball::Ball7 => "ball7",
            Ball::Ball8 => "ball8",
            Ball::Ball9 => "ball9",
            Ball::Ball10 => "ball10",
            Ball::Ball11 => "ball11",
            Ball::Ball12 => "ball12",
            Ball::Ball13 => "ball13",
            Ball::Ball14 => "ball14",
            Ball::Ball15 => "ball15",
            Ball::Ball16 => "ball16",
            Ball::Ball17 => "ball17",
            Ball::Ball18 => "ball18",
        }
    }
}

/// Gradient fill direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gradient {
    Linear,
    Radial,
}

impl Gradient {
    pub const ALL: [Gradient; 2] = [Gradient::Linear, Gradient::Radial];

    pub fn token(&self) -> &'static str {
        match self {
            Gradient::Linear => "linear",
            Gradient::Radial => "radial",
        }
    }
}

/// How an uploaded logo is composited into the code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogoMode {
    Default,
    Clean,
}

impl LogoMode {
    pub const ALL: [LogoMode; 2] = [LogoMode::Default, LogoMode::Clean];

    pub fn token(&self) -> &'static str {
        match self {
            LogoMode::Default => "default",
            LogoMode::Clean => "clean",
        }
    }
}
