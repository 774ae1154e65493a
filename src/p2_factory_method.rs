// Pattern 2: Factory Method - Pizza Stores
// A template method runs the ordering pipeline; concrete stores decide
// which pizza to instantiate.

// ============================================================================
// Example: Products with a Default Preparation Pipeline
// ============================================================================

trait Pizza {
    fn name(&self) -> &str;
    #[allow(dead_code)]
    fn dough(&self) -> &str;
    #[allow(dead_code)]
    fn sauce(&self) -> &str;
    fn toppings(&self) -> &[String];

    fn prepare(&self) {
        println!("Preparing {}", self.name());
        println!("Tossing dough...");
        println!("Adding sauce...");
        println!("Adding toppings...");
        for topping in self.toppings() {
            println!("    {}", topping);
        }
    }

    fn bake(&self) {
        println!("Bake for 25 minutes at 350");
    }

    fn cut(&self) {
        println!("Cutting the pizza into diagonal slices");
    }

    fn box_up(&self) {
        println!("Place pizza in official PizzaStore box");
    }
}

// Concrete products: fixed attribute values, initialized per instance
struct NyStyleCheesePizza {
    name: String,
    dough: String,
    sauce: String,
    toppings: Vec<String>,
}

impl NyStyleCheesePizza {
    fn new() -> Self {
        Self {
            name: "NY Style Sauce and Cheese Pizza".to_string(),
            dough: "Thin Crust Dough".to_string(),
            sauce: "Marinara Sauce".to_string(),
            toppings: vec!["Grated Reggiano Cheese".to_string()],
        }
    }
}

impl Pizza for NyStyleCheesePizza {
    fn name(&self) -> &str {
        &self.name
    }

    fn dough(&self) -> &str {
        &self.dough
    }

    fn sauce(&self) -> &str {
        &self.sauce
    }

    fn toppings(&self) -> &[String] {
        &self.toppings
    }
}

struct ChicagoStyleCheesePizza {
    name: String,
    dough: String,
    sauce: String,
    toppings: Vec<String>,
}

impl ChicagoStyleCheesePizza {
    fn new() -> Self {
        Self {
            name: "Chicago Style Deep Dish Cheese Pizza".to_string(),
            dough: "Extra Thick Crust Dough".to_string(),
            sauce: "Plum Tomato Sauce".to_string(),
            toppings: vec!["Shredded Mozzarella Cheese".to_string()],
        }
    }
}

impl Pizza for ChicagoStyleCheesePizza {
    fn name(&self) -> &str {
        &self.name
    }

    fn dough(&self) -> &str {
        &self.dough
    }

    fn sauce(&self) -> &str {
        &self.sauce
    }

    fn toppings(&self) -> &[String] {
        &self.toppings
    }

    // Deep dish gets cut into squares, not slices
    fn cut(&self) {
        println!("Cutting the pizza into square slices");
    }
}

// ============================================================================
// Example: Creators with a Factory Method Hook
// ============================================================================

trait PizzaStore {
    // Factory method: each store decides which product to instantiate.
    // Unrecognized kinds yield None.
    fn create_pizza(&self, kind: &str) -> Option<Box<dyn Pizza>>;

    // Template method: the ordering pipeline is fixed across stores.
    fn order_pizza(&self, kind: &str) -> Option<Box<dyn Pizza>> {
        let pizza = self.create_pizza(kind)?;

        pizza.prepare();
        pizza.bake();
        pizza.cut();
        pizza.box_up();

        Some(pizza)
    }
}

struct NyPizzaStore;

impl PizzaStore for NyPizzaStore {
    fn create_pizza(&self, kind: &str) -> Option<Box<dyn Pizza>> {
        match kind {
            "cheese" => Some(Box::new(NyStyleCheesePizza::new())),
            _ => None,
        }
    }
}

struct ChicagoPizzaStore;

impl PizzaStore for ChicagoPizzaStore {
    fn create_pizza(&self, kind: &str) -> Option<Box<dyn Pizza>> {
        match kind {
            "cheese" => Some(Box::new(ChicagoStyleCheesePizza::new())),
            _ => None,
        }
    }
}

fn factory_method_example() {
    let ny_store = NyPizzaStore;
    let chicago_store = ChicagoPizzaStore;

    if let Some(pizza) = ny_store.order_pizza("cheese") {
        println!("Ethan ordered a {}\n", pizza.name());
    }

    if let Some(pizza) = chicago_store.order_pizza("cheese") {
        println!("Joel ordered a {}", pizza.name());
    }
}

// ============================================================================
// Tests
// ============================================================================


fn main() {
    println!("Pattern 2: Factory Method - Pizza Stores");
    println!("=========================================\n");

    println!("=== Ordering from Concrete Stores ===");
    factory_method_example();
}
