// Pattern 3: Observer - Weather Station
// A subject notifies registered displays whenever its measurements change.

use std::cell::RefCell;
use std::rc::Rc;

// Heat index approximation over temperature (F) and relative humidity (%).
fn heat_index(t: f64, rh: f64) -> f64 {
    16.923
        + 1.85212e-1 * t
        + 5.37941 * rh
        - 1.00254e-1 * t * rh
        + 9.41695e-3 * t.powi(2)
        + 7.28898e-3 * rh.powi(2)
        + 3.45372e-4 * t.powi(2) * rh
        - 8.14971e-4 * t * rh.powi(2)
        + 1.02102e-5 * t.powi(2) * rh.powi(2)
        - 3.8646e-5 * t.powi(3)
        + 2.91583e-5 * rh.powi(3)
        + 1.42721e-6 * t.powi(3) * rh
        + 1.97483e-7 * t * rh.powi(3)
        - 2.18429e-8 * t.powi(3) * rh.powi(2)
        + 8.43296e-10 * t.powi(2) * rh.powi(3)
        - 4.81975e-11 * t.powi(3) * rh.powi(3)
}

// ============================================================================
// Example: Push Notification
// ============================================================================

mod push {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::heat_index;

    pub trait Observer {
        fn update(&mut self, temperature: f64, humidity: f64, pressure: f64);
    }

    pub trait DisplayElement {
        fn display(&self);
    }

    pub struct WeatherData {
        temperature: f64,
        humidity: f64,
        pressure: f64,
        observers: Vec<Rc<RefCell<dyn Observer>>>,
    }

    impl WeatherData {
        pub fn new() -> Self {
            Self {
                temperature: 0.0,
                humidity: 0.0,
                pressure: 0.0,
                observers: Vec::new(),
            }
        }

        pub fn register_observer(&mut self, observer: Rc<RefCell<dyn Observer>>) {
            self.observers.push(observer);
        }

        // Removing an observer that was never registered is a no-op.
        pub fn remove_observer(&mut self, observer: &Rc<RefCell<dyn Observer>>) {
            if let Some(position) = self
                .observers
                .iter()
                .position(|registered| Rc::ptr_eq(registered, observer))
            {
                self.observers.remove(position);
            }
        }

        pub fn notify_observers(&self) {
            for observer in &self.observers {
                observer
                    .borrow_mut()
                    .update(self.temperature, self.humidity, self.pressure);
            }
        }

        fn measurements_changed(&self) {
            self.notify_observers();
        }

        pub fn set_measurements(&mut self, temperature: f64, humidity: f64, pressure: f64) {
            self.temperature = temperature;
            self.humidity = humidity;
            self.pressure = pressure;
            self.measurements_changed();
        }
    }

    pub struct CurrentConditionsDisplay {
        temperature: f64,
        humidity: f64,
        pressure: f64,
    }

    impl CurrentConditionsDisplay {
        pub fn new() -> Self {
            Self {
                temperature: 0.0,
                humidity: 0.0,
                pressure: 0.0,
            }
        }

        pub fn temperature(&self) -> f64 {
            self.temperature
        }

        pub fn humidity(&self) -> f64 {
            self.humidity
        }

        pub fn pressure(&self) -> f64 {
            self.pressure
        }
    }

    impl Observer for CurrentConditionsDisplay {
        fn update(&mut self, temperature: f64, humidity: f64, pressure: f64) {
            self.temperature = temperature;
            self.humidity = humidity;
            self.pressure = pressure;
            self.display();
        }
    }

    impl DisplayElement for CurrentConditionsDisplay {
        fn display(&self) {
            println!("Current conditions:");
            println!("Temperature: {} F", self.temperature);
            println!("Humidity: {} %", self.humidity);
            println!("Pressure: {}", self.pressure);
        }
    }

    pub struct HeatIndexDisplay {
        heat_index: f64,
    }

    impl HeatIndexDisplay {
        pub fn new() -> Self {
            Self { heat_index: 0.0 }
        }

        pub fn heat_index(&self) -> f64 {
            self.heat_index
        }
    }

    impl Observer for HeatIndexDisplay {
        fn update(&mut self, temperature: f64, humidity: f64, _pressure: f64) {
            self.heat_index = heat_index(temperature, humidity);
            self.display();
        }
    }

    impl DisplayElement for HeatIndexDisplay {
        fn display(&self) {
            println!("Heat index is {:.5}", self.heat_index);
        }
    }
}

fn observer_push_example() {
    let mut weather_data = push::WeatherData::new();

    let current = Rc::new(RefCell::new(push::CurrentConditionsDisplay::new()));
    let heat = Rc::new(RefCell::new(push::HeatIndexDisplay::new()));
    weather_data.register_observer(current.clone());
    weather_data.register_observer(heat.clone());

    weather_data.set_measurements(80.0, 65.0, 30.4);

    // A removed display stops receiving updates.
    let leaving: Rc<RefCell<dyn push::Observer>> = heat.clone();
    weather_data.remove_observer(&leaving);
    weather_data.set_measurements(82.0, 70.0, 29.2);

    let current = current.borrow();
    println!(
        "Cached by displays: {} F, {} %, pressure {}, heat index {:.5}",
        current.temperature(),
        current.humidity(),
        current.pressure(),
        heat.borrow().heat_index()
    );
}

// ============================================================================
// Example: Pull Notification
// ============================================================================

mod pull {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    use super::heat_index;

    pub trait Observer {
        fn update(&mut self);
    }

    pub trait DisplayElement {
        fn display(&self);
    }

    pub struct WeatherData {
        temperature: f64,
        humidity: f64,
        pressure: f64,
        observers: Vec<Rc<RefCell<dyn Observer>>>,
    }

    impl WeatherData {
        pub fn new() -> Self {
            Self {
                temperature: 0.0,
                humidity: 0.0,
                pressure: 0.0,
                observers: Vec::new(),
            }
        }

        pub fn temperature(&self) -> f64 {
            self.temperature
        }

        pub fn humidity(&self) -> f64 {
            self.humidity
        }

        pub fn pressure(&self) -> f64 {
            self.pressure
        }

        pub fn register_observer(&mut self, observer: Rc<RefCell<dyn Observer>>) {
            self.observers.push(observer);
        }

        pub fn remove_observer(&mut self, observer: &Rc<RefCell<dyn Observer>>) {
            if let Some(position) = self
                .observers
                .iter()
                .position(|registered| Rc::ptr_eq(registered, observer))
            {
                self.observers.remove(position);
            }
        }

        // The subject is shared behind Rc<RefCell<..>>, so the mutable
        // borrow must end before observers pull state back out of it.
        pub fn set_measurements(
            subject: &Rc<RefCell<Self>>,
            temperature: f64,
            humidity: f64,
            pressure: f64,
        ) {
            {
                let mut data = subject.borrow_mut();
                data.temperature = temperature;
                data.humidity = humidity;
                data.pressure = pressure;
            }
            Self::measurements_changed(subject);
        }

        pub fn measurements_changed(subject: &Rc<RefCell<Self>>) {
            Self::notify_observers(subject);
        }

        pub fn notify_observers(subject: &Rc<RefCell<Self>>) {
            let observers = subject.borrow().observers.clone();
            for observer in observers {
                observer.borrow_mut().update();
            }
        }
    }

    pub struct CurrentConditionsDisplay {
        weather_data: Weak<RefCell<WeatherData>>,
        temperature: f64,
        humidity: f64,
    }

    impl CurrentConditionsDisplay {
        // Registers itself against the subject it will pull from.
        pub fn new(weather_data: &Rc<RefCell<WeatherData>>) -> Rc<RefCell<Self>> {
            let display = Rc::new(RefCell::new(Self {
                weather_data: Rc::downgrade(weather_data),
                temperature: 0.0,
                humidity: 0.0,
            }));
            weather_data.borrow_mut().register_observer(display.clone());
            display
        }

        pub fn temperature(&self) -> f64 {
            self.temperature
        }

        pub fn humidity(&self) -> f64 {
            self.humidity
        }
    }

    impl Observer for CurrentConditionsDisplay {
        fn update(&mut self) {
            if let Some(data) = self.weather_data.upgrade() {
                let data = data.borrow();
                self.temperature = data.temperature();
                self.humidity = data.humidity();
            }
            self.display();
        }
    }

    impl DisplayElement for CurrentConditionsDisplay {
        fn display(&self) {
            println!("Current conditions:");
            println!("Temperature: {} F", self.temperature);
            println!("Humidity: {} %", self.humidity);
        }
    }

    pub struct HeatIndexDisplay {
        weather_data: Weak<RefCell<WeatherData>>,
        heat_index: f64,
    }

    impl HeatIndexDisplay {
        pub fn new(weather_data: &Rc<RefCell<WeatherData>>) -> Rc<RefCell<Self>> {
            let display = Rc::new(RefCell::new(Self {
                weather_data: Rc::downgrade(weather_data),
                heat_index: 0.0,
            }));
            weather_data.borrow_mut().register_observer(display.clone());
            display
        }

        pub fn heat_index(&self) -> f64 {
            self.heat_index
        }
    }

    impl Observer for HeatIndexDisplay {
        fn update(&mut self) {
            if let Some(data) = self.weather_data.upgrade() {
                let data = data.borrow();
                self.heat_index = heat_index(data.temperature(), data.humidity());
            }
            self.display();
        }
    }

    impl DisplayElement for HeatIndexDisplay {
        fn display(&self) {
            println!("Heat index is {:.5}", self.heat_index);
        }
    }
}

fn observer_pull_example() {
    let weather_data = Rc::new(RefCell::new(pull::WeatherData::new()));

    let current = pull::CurrentConditionsDisplay::new(&weather_data);
    let heat = pull::HeatIndexDisplay::new(&weather_data);

    pull::WeatherData::set_measurements(&weather_data, 80.0, 65.0, 30.4);

    let leaving: Rc<RefCell<dyn pull::Observer>> = heat.clone();
    weather_data.borrow_mut().remove_observer(&leaving);
    pull::WeatherData::set_measurements(&weather_data, 82.0, 70.0, 29.2);

    let station = weather_data.borrow();
    println!(
        "Station reading: {} F, {} %, pressure {}",
        station.temperature(),
        station.humidity(),
        station.pressure()
    );
    println!(
        "Displays cached: {} F, {} %, heat index {:.5}",
        current.borrow().temperature(),
        current.borrow().humidity(),
        heat.borrow().heat_index()
    );
}

// ============================================================================
// Tests
// ============================================================================


fn main() {
    println!("Pattern 3: Observer - Weather Station");
    println!("======================================\n");

    println!("=== Push Notification ===");
    observer_push_example();
    println!();

    println!("=== Pull Notification ===");
    observer_pull_example();
}
