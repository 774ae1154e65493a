// Pattern 1: Decorator - Coffee Pricing
// Condiments wrap a beverage and add to its description and cost.

use std::str::FromStr;

use thiserror::Error;

// ============================================================================
// Example: Decorator Pattern with Trait Objects
// ============================================================================

trait Beverage {
    fn cost(&self) -> f64;
    fn description(&self) -> String;
}

// Concrete components
struct DarkRoast;

impl Beverage for DarkRoast {
    fn cost(&self) -> f64 {
        0.99
    }

    fn description(&self) -> String {
        "Dark Roast Coffee".to_string()
    }
}

struct HouseBlend;

impl Beverage for HouseBlend {
    fn cost(&self) -> f64 {
        0.89
    }

    fn description(&self) -> String {
        "House Blend Coffee".to_string()
    }
}

// Condiment decorators: each owns the beverage it wraps
struct Mocha {
    wrapped: Box<dyn Beverage>,
}

impl Beverage for Mocha {
    fn cost(&self) -> f64 {
        0.15 + self.wrapped.cost()
    }

    fn description(&self) -> String {
        format!("{}, Mocha", self.wrapped.description())
    }
}

struct Whip {
    wrapped: Box<dyn Beverage>,
}

impl Beverage for Whip {
    fn cost(&self) -> f64 {
        0.10 + self.wrapped.cost()
    }

    fn description(&self) -> String {
        format!("{}, Whip", self.wrapped.description())
    }
}

struct Soy {
    wrapped: Box<dyn Beverage>,
}

impl Beverage for Soy {
    fn cost(&self) -> f64 {
        0.20 + self.wrapped.cost()
    }

    fn description(&self) -> String {
        format!("{}, Soy", self.wrapped.description())
    }
}

fn decorator_trait_object_example() {
    let order = Whip {
        wrapped: Box::new(Mocha {
            wrapped: Box::new(DarkRoast),
        }),
    };
    println!("{} -- ${:.2}", order.description(), order.cost());

    let order = Whip {
        wrapped: Box::new(Mocha {
            wrapped: Box::new(Mocha {
                wrapped: Box::new(Soy {
                    wrapped: Box::new(HouseBlend),
                }),
            }),
        }),
    };
    println!("{} -- ${:.2}", order.description(), order.cost());
}

// ============================================================================
// Example: Zero-cost Decorator with Generics
// ============================================================================

struct Espresso;

impl Beverage for Espresso {
    fn cost(&self) -> f64 {
        1.99
    }

    fn description(&self) -> String {
        "Espresso".to_string()
    }
}

struct SteamedMilk<B>(B);

impl<B: Beverage> Beverage for SteamedMilk<B> {
    fn cost(&self) -> f64 {
        0.10 + self.0.cost()
    }

    fn description(&self) -> String {
        format!("{} + Steamed Milk", self.0.description())
    }
}

struct Caramel<B>(B);

impl<B: Beverage> Beverage for Caramel<B> {
    fn cost(&self) -> f64 {
        0.25 + self.0.cost()
    }

    fn description(&self) -> String {
        format!("{} + Caramel", self.0.description())
    }
}

fn decorator_generic_example() {
    // Compile-time composition, no heap allocation
    let order = Caramel(SteamedMilk(Espresso));
    println!("{} -- ${:.2}", order.description(), order.cost());
}

// ============================================================================
// Example: Sized Beverages with Validated Size Changes
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Size {
    Small,
    Medium,
    Large,
}

#[derive(Error, Debug)]
#[error("invalid size {0:?}, expected one of \"s\", \"m\", \"l\"")]
struct InvalidSize(String);

impl FromStr for Size {
    type Err = InvalidSize;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "s" => Ok(Size::Small),
            "m" => Ok(Size::Medium),
            "l" => Ok(Size::Large),
            other => Err(InvalidSize(other.to_string())),
        }
    }
}

trait SizedBeverage {
    fn cost(&self) -> f64;
    fn description(&self) -> String;
    fn size(&self) -> Size;
    fn set_size(&mut self, size: &str) -> Result<(), InvalidSize>;
}

struct SizedHouseBlend {
    size: Size,
}

impl SizedHouseBlend {
    fn new() -> Self {
        Self { size: Size::Small }
    }
}

impl SizedBeverage for SizedHouseBlend {
    fn cost(&self) -> f64 {
        match self.size {
            Size::Small => 0.89,
            Size::Medium => 0.99,
            Size::Large => 1.09,
        }
    }

    fn description(&self) -> String {
        "House Blend Coffee".to_string()
    }

    fn size(&self) -> Size {
        self.size
    }

    fn set_size(&mut self, size: &str) -> Result<(), InvalidSize> {
        self.size = size.parse()?;
        Ok(())
    }
}

// The decorator copies the wrapped component's size at construction.
// Changing the inner size afterwards leaves this copy stale until
// set_size is invoked on the decorator itself.
struct SizedSoy {
    wrapped: Box<dyn SizedBeverage>,
    size: Size,
}

impl SizedSoy {
    fn new(wrapped: Box<dyn SizedBeverage>) -> Self {
        let size = wrapped.size();
        Self { wrapped, size }
    }

    fn component_mut(&mut self) -> &mut dyn SizedBeverage {
        self.wrapped.as_mut()
    }
}

impl SizedBeverage for SizedSoy {
    fn cost(&self) -> f64 {
        let addon = match self.size {
            Size::Small => 0.10,
            Size::Medium => 0.15,
            Size::Large => 0.20,
        };
        addon + self.wrapped.cost()
    }

    fn description(&self) -> String {
        format!("{}, Soy", self.wrapped.description())
    }

    fn size(&self) -> Size {
        self.size
    }

    fn set_size(&mut self, size: &str) -> Result<(), InvalidSize> {
        self.size = size.parse()?;
        self.wrapped.set_size(size)
    }
}

fn decorator_sized_example() {
    let mut blend = SizedHouseBlend::new();
    blend.set_size("l").unwrap();

    let mut order = SizedSoy::new(Box::new(blend));
    println!(
        "{} ({:?}) -- ${:.2}",
        order.description(),
        order.size(),
        order.cost()
    );

    // The wrapper keeps its own copy of the size, so an inner change
    // alone leaves the soy surcharge at the old price point.
    order.component_mut().set_size("s").unwrap();
    println!(
        "After inner resize: {:?} surcharge, ${:.2} total",
        order.size(),
        order.cost()
    );

    // Re-applying the size on the outermost wrapper resynchronizes the chain.
    order.set_size("s").unwrap();
    println!(
        "After outer resize: {:?} surcharge, ${:.2} total",
        order.size(),
        order.cost()
    );

    if let Err(error) = order.set_size("xl") {
        println!("Rejected: {}", error);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_plain_beverages() {
        assert!((DarkRoast.cost() - 0.99).abs() < EPS);
        assert_eq!(DarkRoast.description(), "Dark Roast Coffee");
        assert!((HouseBlend.cost() - 0.89).abs() < EPS);
        assert_eq!(HouseBlend.description(), "House Blend Coffee");
    }

    #[test]
    fn test_dark_roast_mocha_whip() {
        let order = Whip {
            wrapped: Box::new(Mocha {
                wrapped: Box::new(DarkRoast),
            }),
        };
        assert_eq!(order.description(), "Dark Roast Coffee, Mocha, Whip");
        assert!((order.cost() - 1.24).abs() < EPS);
    }

    #[test]
    fn test_house_blend_chain() {
        let order = Whip {
            wrapped: Box::new(Mocha {
                wrapped: Box::new(Mocha {
                    wrapped: Box::new(Soy {
                        wrapped: Box::new(HouseBlend),
                    }),
                }),
            }),
        };
        assert_eq!(
            order.description(),
            "House Blend Coffee, Soy, Mocha, Mocha, Whip"
        );
        assert!((order.cost() - 1.49).abs() < EPS);
    }

    #[test]
    fn test_cost_invariant_under_sibling_reordering() {
        let whip_outer = Whip {
            wrapped: Box::new(Mocha {
                wrapped: Box::new(DarkRoast),
            }),
        };
        let mocha_outer = Mocha {
            wrapped: Box::new(Whip {
                wrapped: Box::new(DarkRoast),
            }),
        };
        assert!((whip_outer.cost() - mocha_outer.cost()).abs() < EPS);
    }

    #[test]
    fn test_generic_chain() {
        let order = Caramel(SteamedMilk(Espresso));
        assert_eq!(order.description(), "Espresso + Steamed Milk + Caramel");
        assert!((order.cost() - 2.34).abs() < EPS);
    }

    #[test]
    fn test_generic_single_wrapper() {
        let order = SteamedMilk(Espresso);
        assert_eq!(order.description(), "Espresso + Steamed Milk");
        assert!((order.cost() - 2.09).abs() < EPS);
    }

    #[test]
    fn test_size_parsing() {
        assert_eq!("s".parse::<Size>().unwrap(), Size::Small);
        assert_eq!("m".parse::<Size>().unwrap(), Size::Medium);
        assert_eq!("l".parse::<Size>().unwrap(), Size::Large);

        let error = "xl".parse::<Size>().unwrap_err();
        assert_eq!(
            error.to_string(),
            "invalid size \"xl\", expected one of \"s\", \"m\", \"l\""
        );
    }

    #[test]
    fn test_set_size_rejects_and_keeps_state() {
        let mut blend = SizedHouseBlend::new();
        blend.set_size("l").unwrap();

        assert!(blend.set_size("grande").is_err());
        assert_eq!(blend.size(), Size::Large);
        assert!((blend.cost() - 1.09).abs() < EPS);
    }

    #[test]
    fn test_sized_price_points() {
        let mut blend = SizedHouseBlend::new();
        assert!((blend.cost() - 0.89).abs() < EPS);
        blend.set_size("m").unwrap();
        assert!((blend.cost() - 0.99).abs() < EPS);
        blend.set_size("l").unwrap();
        assert!((blend.cost() - 1.09).abs() < EPS);
    }

    #[test]
    fn test_decorator_copies_size_at_construction() {
        let mut blend = SizedHouseBlend::new();
        blend.set_size("m").unwrap();

        let soy = SizedSoy::new(Box::new(blend));
        assert_eq!(soy.size(), Size::Medium);
        assert_eq!(soy.description(), "House Blend Coffee, Soy");
        assert!((soy.cost() - (0.15 + 0.99)).abs() < EPS);
    }

    #[test]
    fn test_inner_resize_leaves_wrapper_stale() {
        let mut soy = SizedSoy::new(Box::new(SizedHouseBlend::new()));

        soy.component_mut().set_size("l").unwrap();
        assert_eq!(soy.size(), Size::Small);
        assert!((soy.cost() - (0.10 + 1.09)).abs() < EPS);

        soy.set_size("l").unwrap();
        assert_eq!(soy.size(), Size::Large);
        assert!((soy.cost() - (0.20 + 1.09)).abs() < EPS);
    }

    #[test]
    fn test_outer_set_size_resyncs_whole_chain() {
        let mut chain = SizedSoy::new(Box::new(SizedSoy::new(Box::new(
            SizedHouseBlend::new(),
        ))));
        assert!((chain.cost() - (0.10 + 0.10 + 0.89)).abs() < EPS);

        chain.set_size("l").unwrap();
        assert!((chain.cost() - (0.20 + 0.20 + 1.09)).abs() < EPS);
    }

    #[test]
    fn test_invalid_size_on_decorator_keeps_chain_state() {
        let mut soy = SizedSoy::new(Box::new(SizedHouseBlend::new()));
        assert!(soy.set_size("venti").is_err());
        assert_eq!(soy.size(), Size::Small);
        assert!((soy.cost() - (0.10 + 0.89)).abs() < EPS);
    }
}

fn main() {
    println!("Pattern 1: Decorator - Coffee Pricing");
    println!("======================================\n");

    println!("=== Decorator with Trait Objects ===");
    decorator_trait_object_example();
    println!();

    println!("=== Decorator with Generics ===");
    decorator_generic_example();
    println!();

    println!("=== Sized Beverages ===");
    decorator_sized_example();
}
