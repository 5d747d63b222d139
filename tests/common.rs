use aws_sdk_dynamodb::{
    types::{
        AttributeDefinition, KeySchemaElement, KeyType, ProvisionedThroughput,
        ScalarAttributeType,
    },
    Client,
};

/// Builds a DynamoDB client pointed at a local endpoint. Integration tests
/// run against DynamoDB Local; `DYNAMODB_ENDPOINT` overrides the default.
pub async fn local_client() -> Client {
    let endpoint = std::env::var("DYNAMODB_ENDPOINT")
        .unwrap_or_else(|_| "http://localhost:8000".to_string());

    let config = aws_config::from_env().endpoint_url(endpoint).load().await;
    Client::new(&config)
}

/// Drops and recreates a `userId`-keyed table so each test starts empty.
pub async fn create_table(client: &Client, table_name: &str) {
    let _ = client.delete_table().table_name(table_name).send().await;

    client
        .create_table()
        .table_name(table_name)
        .attribute_definitions(
            AttributeDefinition::builder()
                .attribute_name("userId")
                .attribute_type(ScalarAttributeType::S)
                .build()
                .expect("Failed to build attribute definition"),
        )
        .key_schema(
            KeySchemaElement::builder()
                .attribute_name("userId")
                .key_type(KeyType::Hash)
                .build()
                .expect("Failed to build key schema element"),
        )
        .provisioned_throughput(
            ProvisionedThroughput::builder()
                .read_capacity_units(5)
                .write_capacity_units(5)
                .build()
                .expect("Failed to build provisioned throughput"),
        )
        .send()
        .await
        .expect("Failed to create table");
}
