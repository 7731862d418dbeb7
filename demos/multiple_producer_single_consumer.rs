use std::{thread, time::Duration};
use ucast::{Channel, Consumer, Producer};

fn produce(producer: Producer<String>, name: &str) {
    let mut i = 0;
    loop {
        i += 1;

        // Sending string message to the consumer with producer name
        producer.send(format!("{} Message {}", name, i));

        thread::sleep(Duration::from_millis(1000));
    }
}

fn consume(consumer: Consumer<String>) {
    loop {
        // Receiving message from the producers
        let message = consumer.recv();

        println!("Consumer Received: {}", message);
    }
}

fn main() {
    // Creating a string channel
    let channel = Channel::new();

    // Getting producer and consumer objects
    let producer1 = channel.producer();
    let producer2 = channel.producer();
    let consumer = channel.consumer();

    // Passing producer objects to producer threads
    let producer1_thread = thread::spawn(move || produce(producer1, "Producer1"));
    let producer2_thread = thread::spawn(move || produce(producer2, "Producer2"));

    // Passing consumer object to the consumer thread
    let consumer_thread = thread::spawn(move || consume(consumer));

    producer1_thread.join().unwrap();
    producer2_thread.join().unwrap();
    consumer_thread.join().unwrap();
}
