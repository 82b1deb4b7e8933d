use portfolio_core_testimonial_contracts::TestimonialFeatureService;
use portfolio_demo::{testimonial::BEN, NOW};
use portfolio_persistence_contracts::testimonial::MockTestimonialRepository;
use portfolio_shared_contracts::time::MockTimeService;
use pretty_assertions::assert_eq;

use crate::{baseline::baseline_testimonials, tests::Sut, TestimonialFeatureServiceImpl};

#[tokio::test]
async fn baseline_first() {
    // Arrange
    let time = MockTimeService::new().with_now(*NOW);

    let testimonial_repo = MockTestimonialRepository::new().with_list(vec![BEN.clone()]);

    let sut = TestimonialFeatureServiceImpl {
        time,
        testimonial_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.list_testimonials().await;

    // Assert
    let mut expected = baseline_testimonials(*NOW);
    expected.push(BEN.clone());
    assert_eq!(result.unwrap(), expected);
}

#[tokio::test]
async fn only_baseline() {
    // Arrange
    let time = MockTimeService::new().with_now(*NOW);

    let testimonial_repo = MockTestimonialRepository::new().with_list(vec![]);

    let sut = TestimonialFeatureServiceImpl {
        time,
        testimonial_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.list_testimonials().await.unwrap();

    // Assert
    assert_eq!(
        result
            .iter()
            .map(|x| x.client_name.as_str())
            .collect::<Vec<_>>(),
        ["Berenice", "Mr. Wabo", "Julius", "Doris"]
    );
}
