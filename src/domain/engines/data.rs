//! Built-in catalog data.
//!
//! The six engines the shop launched with. The seed is not itself persisted:
//! it serves reads until the first admin mutation copies it into the store
//! (see [`super::service`]).

use crate::domain::engines::models::{Engine, EngineId, EngineSpecs, EngineType};

/// Stock image applied to admin-created engines without one.
pub const DEFAULT_IMAGE: &str = "https://cdn.poehali.dev/projects/91c98040-6f4f-4b3b-865e-19c01984a939/files/c2d45395-5e4e-439b-b842-852b06bcb410.jpg";

const ELECTRIC_IMAGE: &str = "https://cdn.poehali.dev/projects/91c98040-6f4f-4b3b-865e-19c01984a939/files/8d0a9532-b32c-4aad-98ba-bff4efd92418.jpg";

const GASOLINE_IMAGE: &str = "https://cdn.poehali.dev/projects/91c98040-6f4f-4b3b-865e-19c01984a939/files/bacc3c31-c102-40f0-b8ca-6012debb0084.jpg";

/// The built-in six-engine catalog.
#[must_use]
pub fn seed_catalog() -> Vec<Engine> {
    vec![
        Engine {
            id: EngineId(1),
            name: "Дизельный двигатель ДД-240".to_string(),
            engine_type: EngineType::Diesel,
            manufacturer: "ЯМЗ".to_string(),
            power: 240,
            price: 450_000,
            image: DEFAULT_IMAGE.to_string(),
            specs: EngineSpecs {
                cylinders: 6,
                displacement: "11.15 л".to_string(),
                fuel_type: "Дизель".to_string(),
                cooling: "Жидкостное".to_string(),
            },
        },
        Engine {
            id: EngineId(2),
            name: "Электродвигатель ЭД-150".to_string(),
            engine_type: EngineType::Electric,
            manufacturer: "Сименс".to_string(),
            power: 150,
            price: 320_000,
            image: ELECTRIC_IMAGE.to_string(),
            specs: EngineSpecs {
                cylinders: 0,
                displacement: "N/A".to_string(),
                fuel_type: "Электричество".to_string(),
                cooling: "Воздушное".to_string(),
            },
        },
        Engine {
            id: EngineId(3),
            name: "Бензиновый двигатель БД-180".to_string(),
            engine_type: EngineType::Gasoline,
            manufacturer: "ВАЗ".to_string(),
            power: 180,
            price: 280_000,
            image: GASOLINE_IMAGE.to_string(),
            specs: EngineSpecs {
                cylinders: 4,
                displacement: "2.4 л".to_string(),
                fuel_type: "Бензин АИ-95".to_string(),
                cooling: "Жидкостное".to_string(),
            },
        },
        Engine {
            id: EngineId(4),
            name: "Дизельный двигатель ДД-320".to_string(),
            engine_type: EngineType::Diesel,
            manufacturer: "Caterpillar".to_string(),
            power: 320,
            price: 680_000,
            image: DEFAULT_IMAGE.to_string(),
            specs: EngineSpecs {
                cylinders: 8,
                displacement: "15.2 л".to_string(),
                fuel_type: "Дизель".to_string(),
                cooling: "Жидкостное".to_string(),
            },
        },
        Engine {
            id: EngineId(5),
            name: "Электродвигатель ЭД-200".to_string(),
            engine_type: EngineType::Electric,
            manufacturer: "ABB".to_string(),
            power: 200,
            price: 420_000,
            image: ELECTRIC_IMAGE.to_string(),
            specs: EngineSpecs {
                cylinders: 0,
                displacement: "N/A".to_string(),
                fuel_type: "Электричество".to_string(),
                cooling: "Жидкостное".to_string(),
            },
        },
        Engine {
            id: EngineId(6),
            name: "Бензиновый двигатель БД-250".to_string(),
            engine_type: EngineType::Gasoline,
            manufacturer: "УМЗ".to_string(),
            power: 250,
            price: 390_000,
            image: GASOLINE_IMAGE.to_string(),
            specs: EngineSpecs {
                cylinders: 6,
                displacement: "3.5 л".to_string(),
                fuel_type: "Бензин АИ-98".to_string(),
                cooling: "Жидкостное".to_string(),
            },
        },
    ]
}
