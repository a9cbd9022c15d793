//! Built-in semantic definitions
//!
//! The registry ships with two annotated databases: a retail shop and a
//! network traffic store. Definitions live in code and are loaded at
//! process start; there is no external definition format.

use super::database::DatabaseSemantic;
use super::field::FieldSemantic;
use super::table::TableSemantic;
use super::types::DataType;

/// E-commerce shop database: users, orders, products
pub(crate) fn shop() -> DatabaseSemantic {
    DatabaseSemantic::new("shop", "E-commerce shop database", "E-commerce retail").with_tables(
        vec![shop_users(), shop_orders(), shop_products()],
    )
}

fn shop_users() -> TableSemantic {
    TableSemantic::new(
        "users",
        "User account records",
        "Stores registered users' basic information and account status",
    )
    .with_primary_key("id")
    .with_common_queries(&[
        "Look up basic user information",
        "Track user sign-up trends",
        "Find active users",
    ])
    .with_business_rules(&[
        "User IDs must be unique",
        "Email addresses must be unique and valid",
        "Phone numbers must be well-formed",
    ])
    .with_fields(vec![
        FieldSemantic::new("id", DataType::Integer, "Unique user identifier")
            .with_constraints(&["primary key", "auto increment"])
            .no_aggregation(),
        FieldSemantic::new("username", DataType::String, "Login name of the user")
            .with_examples(&["john_doe", "alice_smith"])
            .with_constraints(&["unique", "not null"]),
        FieldSemantic::new("email", DataType::String, "Email address of the user")
            .with_examples(&["user@example.com", "admin@shop.com"])
            .with_constraints(&["unique", "not null", "email format"]),
        FieldSemantic::new("phone", DataType::String, "Mobile phone number of the user")
            .with_examples(&["13800138000", "13912345678"])
            .with_constraints(&["phone format"])
            .no_sort(),
        FieldSemantic::new("created_at", DataType::DateTime, "When the user signed up")
            .with_examples(&["2024-01-15 10:30:00"])
            .with_constraints(&["not null"]),
        FieldSemantic::new("is_active", DataType::Boolean, "Whether the account is active")
            .with_examples(&["true", "false"])
            .with_constraints(&["not null"])
            .no_sort(),
    ])
}

fn shop_orders() -> TableSemantic {
    TableSemantic::new(
        "orders",
        "Order records",
        "Stores orders placed by users together with their status",
    )
    .with_primary_key("id")
    .with_common_queries(&[
        "Look up order details",
        "Total order amounts",
        "Analyse order trends",
        "Find pending orders",
    ])
    .with_business_rules(&[
        "Order numbers must be unique",
        "Order amounts must be greater than zero",
        "Order status must be a valid value",
    ])
    .with_fields(vec![
        FieldSemantic::new("id", DataType::Integer, "Unique order identifier")
            .with_constraints(&["primary key", "auto increment"])
            .no_aggregation(),
        FieldSemantic::new("user_id", DataType::Integer, "User who placed the order")
            .with_constraints(&["foreign key", "not null"])
            .with_relationship("users", "id"),
        FieldSemantic::new(
            "order_number",
            DataType::String,
            "Order number shown to customers",
        )
        .with_examples(&["ORD202401150001", "ORD202401150002"])
        .with_constraints(&["unique", "not null"]),
        FieldSemantic::new("total_amount", DataType::Decimal, "Total order amount")
            .with_examples(&["99.99", "299.50"])
            .with_constraints(&["not null", "greater than zero"]),
        FieldSemantic::new("status", DataType::String, "Order status")
            .with_examples(&["pending", "paid", "shipped", "delivered", "cancelled"])
            .with_constraints(&["not null", "enumerated"])
            .no_sort(),
        FieldSemantic::new("created_at", DataType::DateTime, "When the order was created")
            .with_examples(&["2024-01-15 14:30:00"])
            .with_constraints(&["not null"]),
        FieldSemantic::new(
            "updated_at",
            DataType::DateTime,
            "When the order was last updated",
        )
        .with_examples(&["2024-01-15 16:45:00"])
        .with_constraints(&["not null"]),
    ])
}

fn shop_products() -> TableSemantic {
    TableSemantic::new(
        "products",
        "Product catalog records",
        "Stores product details, prices and stock levels",
    )
    .with_primary_key("id")
    .with_common_queries(&[
        "Look up product information",
        "Total product sales",
        "Find popular products",
        "Analyse product pricing",
    ])
    .with_business_rules(&[
        "Product names must not be empty",
        "Product prices must be greater than zero",
        "Stock quantities must not be negative",
    ])
    .with_fields(vec![
        FieldSemantic::new("id", DataType::Integer, "Unique product identifier")
            .with_constraints(&["primary key", "auto increment"])
            .no_aggregation(),
        FieldSemantic::new("name", DataType::String, "Product name")
            .with_examples(&["iPhone 15 Pro", "MacBook Air M2"])
            .with_constraints(&["not null"]),
        FieldSemantic::new("description", DataType::Text, "Detailed product description")
            .with_examples(&["Latest iPhone with the A17 Pro chip"])
            .no_sort(),
        FieldSemantic::new("price", DataType::Decimal, "Product price")
            .with_examples(&["999.99", "1299.00"])
            .with_constraints(&["not null", "greater than zero"]),
        FieldSemantic::new("stock_quantity", DataType::Integer, "Units in stock")
            .with_examples(&["100", "50"])
            .with_constraints(&["not null", "zero or greater"]),
        FieldSemantic::new("category", DataType::String, "Product category")
            .with_examples(&["electronics", "clothing", "home goods"]),
        FieldSemantic::new(
            "is_active",
            DataType::Boolean,
            "Whether the product is listed for sale",
        )
        .with_examples(&["true", "false"])
        .with_constraints(&["not null"])
        .no_sort(),
    ])
}

/// Network traffic monitoring database: per-interface IP flow samples
pub(crate) fn network() -> DatabaseSemantic {
    DatabaseSemantic::new(
        "network",
        "Network traffic monitoring database",
        "Network monitoring",
    )
    .with_tables(vec![network_ip_flow()])
}

fn network_ip_flow() -> TableSemantic {
    TableSemantic::new(
        "ip_flow",
        "IP traffic statistics",
        "Stores per-interface IP traffic statistics for network performance monitoring and analysis",
    )
    .with_primary_key("timestamp,ip,intf")
    .with_common_queries(&[
        "Look up traffic for a given IP",
        "Analyse interface traffic trends",
        "Total bandwidth usage over a time window",
        "Find high-traffic IP addresses",
        "Watch interface traffic peaks",
    ])
    .with_business_rules(&[
        "IP addresses must be well-formed",
        "Bandwidth rates must not be negative",
        "Timestamps must be valid",
        "Interface names must not be empty",
    ])
    .with_fields(vec![
        FieldSemantic::new(
            "ip",
            DataType::String,
            "IP address identifying a host or device",
        )
        .with_examples(&["192.168.1.100", "10.0.0.1", "172.16.1.50"])
        .with_constraints(&["not null", "IP address format"])
        .no_aggregation(),
        FieldSemantic::new(
            "intf",
            DataType::String,
            "Network interface the traffic passed through",
        )
        .with_examples(&["eth0", "eth1", "wlan0", "lo", "ens33"])
        .with_constraints(&["not null"])
        .no_aggregation(),
        FieldSemantic::new("bps", DataType::Float, "Bandwidth rate in bytes per second")
            .with_examples(&["1024.5", "2048000.0", "512.25"])
            .with_constraints(&["not null", "zero or greater"]),
        FieldSemantic::new(
            "timestamp",
            DataType::DateTime,
            "When the traffic sample was collected",
        )
        .with_examples(&["2024-01-15 14:30:00", "2024-01-15 14:31:00"])
        .with_constraints(&["not null"]),
    ])
}
