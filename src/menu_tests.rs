/*
 * Unit tests for the console menu
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_menu_choice_parse
 * - test_console_add_and_process
 * - test_console_rejects_bad_input
 * - test_console_rejects_bad_current_floor_early
 * - test_console_next_trip_down_only
 * - test_console_show_pending
 * - test_console_end_of_input
 * - test_console_waits_for_renderer
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod menu_tests {
    use crate::config::ElevatorConfig;
    use crate::elevator::Dispatcher;
    use crate::menu::{Console, MenuChoice};
    use crate::shared::RenderEvent;
    use crossbeam_channel::{unbounded, Receiver};
    use std::io::Cursor;

    fn setup_console(
        input: &str,
    ) -> (Console<Cursor<Vec<u8>>, Vec<u8>>, Receiver<RenderEvent>) {
        // Arrange mock renderer channel
        let (render_tx, render_rx) = unbounded::<RenderEvent>();
        let config = ElevatorConfig {
            n_floors: 10,
            sub_floor_steps: 1,
        };
        let dispatcher = Dispatcher::new(&config, render_tx);
        let console = Console::new(
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            dispatcher,
            None,
        );
        (console, render_rx)
    }

    fn output_of(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_menu_choice_parse() {
        // Purpose: Menu numbers map to actions, anything else is rejected

        // Act & Assert
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::AddRequest));
        assert_eq!(MenuChoice::parse(" 2 \n"), Some(MenuChoice::ProcessRequests));
        assert_eq!(MenuChoice::parse("3"), Some(MenuChoice::ShowFloor));
        assert_eq!(MenuChoice::parse("4"), Some(MenuChoice::ShowPending));
        assert_eq!(MenuChoice::parse("5"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("6"), None);
        assert_eq!(MenuChoice::parse("exit"), None);
    }

    #[test]
    fn test_console_add_and_process() {
        // Purpose: Requests added through the menu are served when processing is chosen

        // Arrange
        let (mut console, _render_rx) = setup_console("1\n2\n7\n1\n0\n5\n2\n3\n5\n");

        // Act
        console.run().unwrap();

        // Assert
        assert_eq!(console.dispatcher().current_floor(), 7);
        assert!(console.dispatcher().pending().is_empty());
        let out = output_of(console);
        assert!(out.contains("Request queued: floor 2 -> 7."));
        assert!(out.contains("Served 2 request(s). The elevator is at floor 7."));
        assert!(out.contains("The elevator is currently at floor 7"));
        assert!(out.ends_with("Exiting...\n"));
    }

    #[test]
    fn test_console_rejects_bad_input() {
        // Purpose: Bad numbers, invalid floors and unknown choices are reported without queuing

        // Arrange
        let (mut console, _render_rx) = setup_console("1\nfour\n1\n10\n2\n1\n3\n3\n9\n5\n");

        // Act
        console.run().unwrap();

        // Assert
        assert!(console.dispatcher().pending().is_empty());
        let out = output_of(console);
        assert!(out.contains("Please enter a valid integer for the floor number."));
        assert!(out.contains("Invalid user floor: 10. It must be between 0 and 9."));
        assert!(out.contains("You are already on floor 3. No need to move."));
        assert!(out.contains("Invalid choice. Please select a valid option."));
    }

    #[test]
    fn test_console_rejects_bad_current_floor_early() {
        // Purpose: A non-integer current floor is rejected before the destination is asked for

        // Arrange
        let (mut console, _render_rx) = setup_console("1\nabc\n3\n5\n");

        // Act
        console.run().unwrap();

        // Assert
        assert!(console.dispatcher().pending().is_empty());
        let out = output_of(console);
        assert!(out.contains("Please enter a valid integer for the floor number."));
        assert!(!out.contains("Enter your destination floor: "));
        assert!(out.contains("The elevator is currently at floor 0"));
        assert!(!out.contains("Invalid choice. Please select a valid option."));
    }

    #[test]
    fn test_console_next_trip_down_only() {
        // Purpose: With no upward trips the next trip comes from the down queue

        // Arrange
        let (mut console, _render_rx) = setup_console("1\n4\n2\n1\n7\n0\n4\n5\n");

        // Act
        console.run().unwrap();

        // Assert
        let out = output_of(console);
        assert!(out.contains("Up queue: []"));
        assert!(out.contains("Next trip: 7 -> 0"));
    }

    #[test]
    fn test_console_show_pending() {
        // Purpose: Pending requests are listed per queue in service order

        // Arrange
        let (mut console, _render_rx) =
            setup_console("4\n1\n2\n7\n1\n0\n5\n1\n6\n1\n1\n8\n3\n4\n5\n");

        // Act
        console.run().unwrap();

        // Assert
        assert_eq!(console.dispatcher().pending().len(), 4);
        let out = output_of(console);
        assert!(out.contains("No pending requests."));
        assert!(out.contains("Up queue: [0 -> 5, 2 -> 7]"));
        assert!(out.contains("Down queue: [8 -> 3, 6 -> 1]"));
        assert!(out.contains("Next trip: 0 -> 5"));
    }

    #[test]
    fn test_console_end_of_input() {
        // Purpose: Running out of input exits cleanly, even halfway through a request

        // Arrange
        let (mut console, _render_rx) = setup_console("1\n4\n");

        // Act
        console.run().unwrap();

        // Assert
        assert!(console.dispatcher().pending().is_empty());
        assert!(output_of(console).ends_with("Exiting...\n"));
    }

    #[test]
    fn test_console_waits_for_renderer() {
        // Purpose: Processing returns once the renderer signals completion

        // Arrange
        let (render_tx, _render_rx) = unbounded::<RenderEvent>();
        let (render_done_tx, render_done_rx) = unbounded::<()>();
        let dispatcher = Dispatcher::new(&ElevatorConfig::default(), render_tx);
        let mut console = Console::new(
            Cursor::new(b"2\n5\n".to_vec()),
            Vec::new(),
            dispatcher,
            Some(render_done_rx),
        );
        render_done_tx.send(()).unwrap();

        // Act
        console.run().unwrap();

        // Assert
        let out = output_of(console);
        assert!(out.contains("Served 0 request(s). The elevator is at floor 0."));
    }
}
