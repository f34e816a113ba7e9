use std::convert::Infallible ;
use std::sync::Arc ;
use std::time::Duration ;
use atmp::{ collect, nem, wrap, wrap_sync, Attempt, BoxedAttempt, Collect, NEMap };
use tokio::sync::Barrier ;

use crate::call_counter::CallCounter ;
use crate::operations::{ add, faulty_add, messages };

#[derive( Debug, PartialEq )]
enum Field {
	Number( i32 ),
	Text( String ),
	Unit,
}

fn failing( message: &'static str ) -> BoxedAttempt<( i32, i32 ), i32> {
	wrap( move | _: ( i32, i32 )| async move { Err::<i32, _>( message ) }).boxed()
}

#[tokio::test]
async fn collects_every_value_under_its_key() {

	let fields: Collect<&str, BoxedAttempt<( i32, i32 ), Field>> = collect( nem!{
		"add" => wrap( add ).map( Field::Number ).boxed(),
		"string" => wrap(|( a, _ ): ( i32, i32 )| async move { Ok::<_, Infallible>( a.to_string() ) })
			.map( Field::Text )
			.boxed(),
		"void" => wrap_sync(| _: ( i32, i32 )| Ok::<_, Infallible>(()) ).map(| (): () | Field::Unit ).boxed()
	});

	let values = fields.attempt(( 1, 2 )).await.into_result().expect( "every member succeeds" );

	assert_eq!( values.get( &"add" ), Some( &Field::Number( 3 )));
	assert_eq!( values.get( &"string" ), Some( &Field::Text( "1".to_string() )));
	assert_eq!( values.get( &"void" ), Some( &Field::Unit ));

}

#[tokio::test]
async fn uses_the_same_arguments_for_every_member() {

	let both: Collect<&str, BoxedAttempt<( i32, i32 ), i32>> = collect( nem!{
		"add" => wrap( add ).boxed(),
		"append" => wrap_sync(|( a, b ): ( i32, i32 )| Ok::<_, Infallible>( a * 10 + b )).boxed()
	});

	let values = both.attempt(( 1, 2 )).await.into_result().expect( "every member succeeds" );

	assert_eq!( values.get( &"add" ), Some( &3 ));
	assert_eq!( values.get( &"append" ), Some( &12 ));

}

#[tokio::test]
async fn collects_the_errors_in_the_failure_list() {

	let both: Collect<&str, BoxedAttempt<( i32, i32 ), i32>> = collect( nem!{
		"error1" => wrap( faulty_add ).boxed(),
		"error2" => wrap( faulty_add ).boxed()
	});

	let outcome = both.attempt(( 1, 2 )).await;

	assert!( outcome.value().is_none() );
	assert_eq!( messages( &outcome ), vec![ "a is 1", "a is 1" ]);

}

#[tokio::test]
async fn drops_partial_values_and_runs_every_member_once() {

	let add_calls = CallCounter::new();
	let faulty_calls = CallCounter::new();
	let counted_add = {
		let counter = add_calls.clone();
		wrap( move | args: ( i32, i32 )| { counter.hit(); add( args ) }).boxed()
	};
	let counted_faulty = {
		let counter = faulty_calls.clone();
		wrap( move | args: ( i32, i32 )| { counter.hit(); faulty_add( args ) }).boxed()
	};
	let both: Collect<&str, BoxedAttempt<( i32, i32 ), i32>> = collect( nem!{
		"a" => counted_add,
		"b" => counted_faulty
	});

	let outcome = both.attempt(( 1, 2 )).await;

	assert!( outcome.value().is_none() );
	assert_eq!( messages( &outcome ), vec![ "a is 1" ]);
	assert_eq!( add_calls.count(), 1 );
	assert_eq!( faulty_calls.count(), 1 );

}

#[tokio::test]
async fn reports_failures_in_key_order() {

	let members: Collect<&str, BoxedAttempt<( i32, i32 ), i32>> = collect( nem!{
		"first" => failing( "first failed" ),
		"second" => failing( "second failed" ),
		"third" => wrap( add ).boxed(),
		"fourth" => failing( "fourth failed" )
	});

	let expected = members.keys()
		.filter(| key | **key != "third" )
		.map(| key | format!( "{} failed", key ))
		.collect::<Vec<_>>();

	let outcome = members.attempt(( 1, 2 )).await;
	assert_eq!( messages( &outcome ), expected );

	// The order is a property of the collection, not of a single run.
	assert_eq!( messages( &members.attempt(( 1, 2 )).await ), expected );

}

#[tokio::test]
async fn keeps_the_internal_order_of_a_member_with_several_failures() {

	let inner: Collect<&str, BoxedAttempt<( i32, i32 ), i32>> = collect( nem!{
		"left" => failing( "left failed" ),
		"right" => failing( "right failed" )
	});
	let inner_order = inner.keys()
		.map(| key | format!( "{} failed", key ))
		.collect::<Vec<_>>();

	let outer: Collect<&str, BoxedAttempt<( i32, i32 ), i32>> = collect( nem!{
		"nested" => inner.map(| _: NEMap<&'static str, i32> | 0 ).boxed(),
		"single" => failing( "single failed" )
	});

	let mut expected = Vec::new();
	for key in outer.keys() {
		match *key {
			"nested" => expected.extend( inner_order.iter().cloned() ),
			_ => expected.push( "single failed".to_string() ),
		}
	}

	assert_eq!( messages( &outer.attempt(( 1, 2 )).await ), expected );

}

#[tokio::test]
async fn runs_members_concurrently() {

	let barrier = Arc::new( Barrier::new( 2 ));
	let rendezvous = || {
		let barrier = barrier.clone();
		wrap( move | n: i32 | {
			let barrier = barrier.clone();
			async move {
				barrier.wait().await;
				Ok::<_, Infallible>( n )
			}
		}).boxed()
	};

	let both: Collect<&str, BoxedAttempt<i32, i32>> = collect( nem!{
		"left" => rendezvous(),
		"right" => rendezvous()
	});

	let outcome = tokio::time::timeout( Duration::from_secs( 5 ), both.attempt( 1 )).await
		.expect( "members waited on each other, so they must run concurrently" );
	assert!( outcome.is_success() );

}

#[tokio::test]
async fn lets_slow_members_finish_after_another_failed() {

	let counter = CallCounter::new();
	let slow = {
		let counter = counter.clone();
		wrap( move | n: i32 | {
			let counter = counter.clone();
			async move {
				tokio::task::yield_now().await;
				tokio::task::yield_now().await;
				counter.hit();
				Ok::<_, Infallible>( n )
			}
		}).boxed()
	};
	let quick = wrap_sync(| _: i32 | Err::<i32, _>( "quick failure" )).boxed();

	let both: Collect<&str, BoxedAttempt<i32, i32>> = collect( nem!{ "slow" => slow, "quick" => quick });
	let outcome = both.attempt( 1 ).await;

	assert_eq!( messages( &outcome ), vec![ "quick failure" ]);
	assert_eq!( counter.count(), 1 );

}

#[tokio::test]
async fn gives_equal_outcomes_for_equal_arguments() {

	let both: Collect<&str, BoxedAttempt<( i32, i32 ), i32>> = collect( nem!{
		"add" => wrap( add ).boxed(),
		"faulty" => wrap( faulty_add ).boxed()
	});

	assert_eq!( messages( &both.attempt(( 1, 2 )).await ), messages( &both.attempt(( 1, 2 )).await ));

	let sums = | outcome: atmp::Outcome<NEMap<&'static str, i32>> | outcome.value()
		.map(| values | ( values.get( &"add" ).copied(), values.get( &"faulty" ).copied() ));
	assert_eq!( sums( both.attempt(( 2, 2 )).await ), Some(( Some( 4 ), Some( 4 ))));
	assert_eq!( sums( both.attempt(( 2, 2 )).await ), sums( both.attempt(( 2, 2 )).await ));

}
