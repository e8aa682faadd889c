use super::aggregate::FinishedGood;

pub fn finished_goods() -> Vec<FinishedGood> {
    vec![
        FinishedGood {
            item_number: "FG-50001".into(),
            product_name: "Green Tea 500ml".into(),
            search_name: "GREEN TEA 500".into(),
            product_category: "Beverages".into(),
            brand: "Teh Segar".into(),
            unit: "CTN".into(),
            shelf_life_days: 365,
            exported: true,
            export_country: "Vietnam".into(),
            hs_code: "2202.10".into(),
            price: "96000".into(),
            currency: "IDR".into(),
        },
        FinishedGood {
            item_number: "FG-50002".into(),
            product_name: "Cassava Chips 80g".into(),
            search_name: "CASSAVA CHIPS".into(),
            product_category: "Snacks".into(),
            brand: "Kripik Mantap".into(),
            unit: "PACK".into(),
            shelf_life_days: 180,
            exported: false,
            export_country: String::new(),
            hs_code: String::new(),
            price: "8500".into(),
            currency: "IDR".into(),
        },
        FinishedGood {
            item_number: "FG-50003".into(),
            product_name: "UHT Milk 1L".into(),
            search_name: "UHT MILK 1L".into(),
            product_category: "Dairy".into(),
            brand: "Sua Tuoi".into(),
            unit: "CTN".into(),
            shelf_life_days: 240,
            exported: false,
            export_country: String::new(),
            hs_code: String::new(),
            price: "380000".into(),
            currency: "VND".into(),
        },
    ]
}
