//! Event-wiring integration tests: produce_events against the provider.

#[cfg(test)]
mod tests {
    use gantry_core::{
        DeployError, DeployOutputs, EventFilter, EventSubscriptionRequest, FilterRuleKind,
        ServiceDeployer, ServiceEventType,
    };
    use gantry_s3_model::FilterRuleName;

    use crate::{consumer_outputs, deploy_seeded, import_context, in_memory_service, test_bucket_name};

    fn created_request() -> EventSubscriptionRequest {
        EventSubscriptionRequest::new(vec!["s3:ObjectCreated:*".to_owned()])
    }

    #[tokio::test]
    async fn test_should_wire_queue_consumer_into_bucket_configuration() {
        let (s3, service) = in_memory_service();
        let bucket = test_bucket_name("queue");
        let producer = deploy_seeded(&s3, &service, "uploads", &bucket).await;

        let producer_ctx = import_context("uploads", serde_json::json!({ "bucket_name": bucket }));
        let consumer_ctx = import_context("worker", serde_json::json!({}));
        let consumer = consumer_outputs("worker", ServiceEventType::Sqs, "arn:aws:sqs:us-east-1:0:jobs");

        let ack = service
            .produce_events(
                &producer_ctx,
                &producer,
                &created_request(),
                &consumer_ctx,
                &consumer,
            )
            .await
            .unwrap_or_else(|e| panic!("produce_events should succeed: {e}"));

        assert_eq!(ack.producer_service_name, "uploads");
        assert_eq!(ack.consumer_service_name, "worker");

        let stored = s3
            .stored_configuration(&bucket)
            .expect("configuration should be stored");
        assert_eq!(stored.queue_configurations.len(), 1);
        assert!(stored.lambda_function_configurations.is_empty());
        assert!(stored.topic_configurations.is_empty());

        let entry = &stored.queue_configurations[0];
        assert_eq!(entry.queue_arn, "arn:aws:sqs:us-east-1:0:jobs");
        assert_eq!(entry.events, vec!["s3:ObjectCreated:*"]);
        assert!(entry.filter.is_none());
    }

    #[tokio::test]
    async fn test_should_attach_declared_filters_in_order() {
        let (s3, service) = in_memory_service();
        let bucket = test_bucket_name("filters");
        let producer = deploy_seeded(&s3, &service, "uploads", &bucket).await;

        let producer_ctx = import_context("uploads", serde_json::json!({ "bucket_name": bucket }));
        let consumer_ctx = import_context("resizer", serde_json::json!({}));
        let consumer = consumer_outputs(
            "resizer",
            ServiceEventType::Lambda,
            "arn:aws:lambda:us-east-1:0:function:resize",
        );
        let request = created_request().with_filters(vec![
            EventFilter::new(FilterRuleKind::Prefix, "incoming/"),
            EventFilter::new(FilterRuleKind::Suffix, ".jpg"),
        ]);

        service
            .produce_events(&producer_ctx, &producer, &request, &consumer_ctx, &consumer)
            .await
            .expect("produce_events");

        let stored = s3.stored_configuration(&bucket).expect("stored configuration");
        let entry = &stored.lambda_function_configurations[0];
        let rules = &entry
            .filter
            .as_ref()
            .and_then(|f| f.key.as_ref())
            .expect("key filter should be present")
            .filter_rules;

        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].name, Some(FilterRuleName::Prefix));
        assert_eq!(rules[0].value.as_deref(), Some("incoming/"));
        assert_eq!(rules[1].name, Some(FilterRuleName::Suffix));
        assert_eq!(rules[1].value.as_deref(), Some(".jpg"));
    }

    #[tokio::test]
    async fn test_should_omit_filter_block_when_filter_list_is_empty() {
        let (s3, service) = in_memory_service();
        let bucket = test_bucket_name("nofilter");
        let producer = deploy_seeded(&s3, &service, "uploads", &bucket).await;

        let producer_ctx = import_context("uploads", serde_json::json!({ "bucket_name": bucket }));
        let consumer_ctx = import_context("auditor", serde_json::json!({}));
        let consumer = consumer_outputs("auditor", ServiceEventType::Sns, "arn:aws:sns:us-east-1:0:audit");
        let request = created_request().with_filters(Vec::new());

        service
            .produce_events(&producer_ctx, &producer, &request, &consumer_ctx, &consumer)
            .await
            .expect("produce_events");

        let stored = s3.stored_configuration(&bucket).expect("stored configuration");
        assert!(stored.topic_configurations[0].filter.is_none());
    }

    #[tokio::test]
    async fn test_should_reject_unsupported_consumer_kind() {
        let (s3, service) = in_memory_service();
        let bucket = test_bucket_name("unsupported");
        let producer = deploy_seeded(&s3, &service, "uploads", &bucket).await;

        let producer_ctx = import_context("uploads", serde_json::json!({ "bucket_name": bucket }));
        let consumer_ctx = import_context("tables", serde_json::json!({}));
        let consumer = consumer_outputs(
            "tables",
            ServiceEventType::DynamoDb,
            "arn:aws:dynamodb:us-east-1:0:table/t",
        );

        let err = service
            .produce_events(
                &producer_ctx,
                &producer,
                &created_request(),
                &consumer_ctx,
                &consumer,
            )
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "s3-import - unsupported event consumer type given: DynamoDB"
        );
        assert_eq!(s3.write_count(&bucket), 0);
        assert!(s3.stored_configuration(&bucket).is_none());
    }

    #[tokio::test]
    async fn test_should_require_event_outputs_from_both_sides() {
        let (s3, service) = in_memory_service();
        let bucket = test_bucket_name("outputs");
        let producer = deploy_seeded(&s3, &service, "uploads", &bucket).await;

        let producer_ctx = import_context("uploads", serde_json::json!({ "bucket_name": bucket }));
        let consumer_ctx = import_context("worker", serde_json::json!({}));
        // A consumer that never published event outputs.
        let consumer = DeployOutputs::new("worker");

        let err = service
            .produce_events(
                &producer_ctx,
                &producer,
                &created_request(),
                &consumer_ctx,
                &consumer,
            )
            .await
            .unwrap_err();

        assert!(matches!(err, DeployError::MissingEventOutputs { .. }));
        assert!(err.to_string().starts_with("s3-import - "));
        assert!(s3.stored_configuration(&bucket).is_none());
    }

    #[tokio::test]
    async fn test_should_replace_configuration_on_second_consumer() {
        let (s3, service) = in_memory_service();
        let bucket = test_bucket_name("replace");
        let producer = deploy_seeded(&s3, &service, "uploads", &bucket).await;
        let producer_ctx = import_context("uploads", serde_json::json!({ "bucket_name": bucket }));

        let lambda_ctx = import_context("resizer", serde_json::json!({}));
        let lambda = consumer_outputs(
            "resizer",
            ServiceEventType::Lambda,
            "arn:aws:lambda:us-east-1:0:function:resize",
        );
        service
            .produce_events(&producer_ctx, &producer, &created_request(), &lambda_ctx, &lambda)
            .await
            .expect("first produce_events");

        let queue_ctx = import_context("worker", serde_json::json!({}));
        let queue = consumer_outputs("worker", ServiceEventType::Sqs, "arn:aws:sqs:us-east-1:0:jobs");
        service
            .produce_events(&producer_ctx, &producer, &created_request(), &queue_ctx, &queue)
            .await
            .expect("second produce_events");

        // Each wiring call replaces the bucket's whole configuration; the
        // second consumer's entry is the only survivor.
        let stored = s3.stored_configuration(&bucket).expect("stored configuration");
        assert!(stored.lambda_function_configurations.is_empty());
        assert_eq!(stored.queue_configurations.len(), 1);
        assert_eq!(stored.len(), 1);
    }

    #[tokio::test]
    async fn test_should_surface_provider_failure_from_wiring() {
        let (s3, service) = in_memory_service();
        let bucket = test_bucket_name("failure");
        // Outputs reference a bucket the provider does not know.
        let producer = {
            let mut outputs = DeployOutputs::new("uploads");
            outputs.event_outputs = Some(gantry_core::EventOutputs::new(
                &bucket,
                format!("arn:aws:s3:::{bucket}"),
                "s3.amazonaws.com",
                ServiceEventType::S3,
            ));
            outputs
        };

        let producer_ctx = import_context("uploads", serde_json::json!({ "bucket_name": bucket }));
        let consumer_ctx = import_context("worker", serde_json::json!({}));
        let consumer = consumer_outputs("worker", ServiceEventType::Sqs, "arn:aws:sqs:us-east-1:0:jobs");

        let err = service
            .produce_events(
                &producer_ctx,
                &producer,
                &created_request(),
                &consumer_ctx,
                &consumer,
            )
            .await
            .unwrap_err();

        assert!(matches!(err, DeployError::Provider(_)));
        assert!(err.to_string().contains(&bucket));
    }
}
